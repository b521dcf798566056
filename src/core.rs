pub mod features;
pub mod i18n;
