#[derive(Clone)]
pub enum Msg {
    /// Expand or collapse the country list.
    ToggleList,
    UpdateSearch(String),
    /// Commit a country by ISO code and collapse the list.
    SelectCountry(&'static str),
    /// Live edit of the tel field.
    UpdateNational(String),
}
