const STATE_ID_WAITING: u8 = 0;
const STATE_ID_FADE_IN: u8 = 1;
const STATE_ID_ON: u8 = 2;
const STATE_ID_OFF: u8 = 3;
const STATE_ID_FADE_OUT: u8 = 4;

const STATE_NAME_WAITING: &str = "waiting";
const STATE_NAME_FADE_IN: &str = "fade_in";
const STATE_NAME_ON: &str = "on";
const STATE_NAME_OFF: &str = "off";
const STATE_NAME_FADE_OUT: &str = "fade_out";

/// Phase of an eye pair
///
/// The only legal cycle is
/// `Waiting -> FadeIn -> On -> (Off -> On)* -> FadeOut -> Waiting`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EyeState {
    /// Dark, waiting for the next appearance
    Waiting = STATE_ID_WAITING,
    /// Ramping up to the base color
    FadeIn = STATE_ID_FADE_IN,
    /// Fully lit
    On = STATE_ID_ON,
    /// Briefly dark during a blink
    Off = STATE_ID_OFF,
    /// Ramping down to black
    FadeOut = STATE_ID_FADE_OUT,
}

impl EyeState {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            STATE_ID_WAITING => Self::Waiting,
            STATE_ID_FADE_IN => Self::FadeIn,
            STATE_ID_ON => Self::On,
            STATE_ID_OFF => Self::Off,
            STATE_ID_FADE_OUT => Self::FadeOut,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => STATE_NAME_WAITING,
            Self::FadeIn => STATE_NAME_FADE_IN,
            Self::On => STATE_NAME_ON,
            Self::Off => STATE_NAME_OFF,
            Self::FadeOut => STATE_NAME_FADE_OUT,
        }
    }
}
