use super::ui::{self, StyleType};
use crate::exchange::Conversion;

impl Conversion {
    /// Renders the conversion as a single styled line for stdout.
    pub fn display_line(&self) -> String {
        format!(
            "{} {} {} is {} {} {}",
            ui::style_text("Pound conversion:", StyleType::Title),
            ui::style_text(&self.amount.to_string(), StyleType::Amount),
            self.direction.from_currency().symbol(),
            ui::style_text(&format!("{:.4}", self.converted), StyleType::Result),
            self.direction.to_currency().symbol(),
            ui::style_text(
                &format!("(rate {} as of {})", self.snapshot.rate, self.snapshot.fetched_at),
                StyleType::Subtle
            ),
        )
    }
}
