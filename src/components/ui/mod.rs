mod button;
mod digit_input;
mod spinner;
mod toast;

pub(crate) use button::Button;
pub(crate) use digit_input::DigitInput;
pub(crate) use spinner::Spinner;
pub(crate) use toast::{ToastProvider, use_toasts};
