use yew::prelude::*;

/// Properties for the `PhoneInputComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct PhoneInputProps {
    /// The committed normalized value. Usually an echo of what the widget
    /// last emitted through `on_change`; when the parent sets something else,
    /// the widget adopts it — an empty value clears the digits, a normalized
    /// `+<dial><digits>` value replaces country and digits alike.
    #[prop_or_default]
    pub value: String,

    /// Fired with the normalized value on every edit or country change.
    pub on_change: Callback<String>,

    /// ISO code of the country preselected on first render.
    #[prop_or(AttrValue::Static("NG"))]
    pub default_country: AttrValue,

    #[prop_or_default]
    pub placeholder: AttrValue,
}
