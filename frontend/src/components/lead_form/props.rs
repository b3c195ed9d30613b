use common::model::submission::FORM_ID;
use yew::prelude::*;

/// Properties for the `LeadFormComponent`.
///
/// Both default to the production wiring; overriding them is only useful when
/// mounting the form against a different CMS form or host.
#[derive(Properties, PartialEq, Clone)]
pub struct LeadFormProps {
    /// Identifier of the CMS form the submissions are filed under.
    #[prop_or(AttrValue::Static(FORM_ID))]
    pub form_id: AttrValue,

    /// Endpoint receiving the submission POST.
    #[prop_or(AttrValue::Static("/api/form-submissions"))]
    pub action: AttrValue,
}
