/// Checked by [`super::ConfigManager`] on every load and save.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
