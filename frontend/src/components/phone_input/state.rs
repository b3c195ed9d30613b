use crate::components::phone_input::countries::{find, Country, COUNTRIES};
use crate::components::phone_input::helpers::normalize;

/// State of the phone widget: the committed country, whether the searchable
/// country list is expanded, the current search query, and the raw national
/// digits typed into the tel field.
pub struct PhoneInputComponent {
    pub selected: &'static Country,
    pub open: bool,
    pub search: String,
    pub national: String,
}

impl PhoneInputComponent {
    pub fn new(default_country: &str) -> Self {
        Self {
            selected: find(default_country).unwrap_or(&COUNTRIES[0]),
            open: false,
            search: String::new(),
            national: String::new(),
        }
    }

    /// The value exposed to the parent: `+<dial><digits>` or empty while the
    /// entry is incomplete.
    pub fn normalized(&self) -> String {
        normalize(self.selected.dial, &self.national)
    }
}
