/// Supplies the configured display name of the extra fee.
pub trait LabelProvider: Send + Sync {
    /// `None` or an empty string means no label is configured.
    fn fee_label(&self) -> Option<String>;
}

/// A label fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct FixedLabel(String);

impl FixedLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }
}

impl LabelProvider for FixedLabel {
    fn fee_label(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

impl<F> LabelProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn fee_label(&self) -> Option<String> {
        self()
    }
}
