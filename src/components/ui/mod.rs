mod alert;
mod button;
mod card;
mod copy_button;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use card::{Card, StatCard};
pub(crate) use copy_button::CopyButton;
pub(crate) use spinner::Spinner;
