//! Click-to-call and WhatsApp links for the dealership.

/// The dealership's phone numbers, as configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinks {
    phone: String,
    whatsapp: String,
}

impl ContactLinks {
    pub fn new(phone: impl Into<String>, whatsapp: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            whatsapp: whatsapp.into(),
        }
    }

    /// The phone number as configured, for display.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// `tel:` URI with all whitespace removed.
    pub fn tel_uri(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }

    /// `wa.me` URI with whitespace and `+` removed.
    pub fn whatsapp_uri(&self) -> String {
        let digits: String = self
            .whatsapp
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '+')
            .collect();
        format!("https://wa.me/{digits}")
    }
}
