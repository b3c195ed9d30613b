//! Declarative plugin configuration for the headless CMS.
//!
//! Nothing here runs in the page session. The CMS server process ingests this
//! registry (as JSON) when it boots: a form-builder plugin with uploads
//! enabled and payments disabled, a fixed rich-text feature set for the
//! default form schema's confirmation message, and the cloud-hosting plugin
//! with no custom behavior. `apply_form_overrides` is the only logic: a pure
//! configuration-time transform over the default field list.

use serde::{Deserialize, Serialize};

/// Name of the default form-schema field whose editor gets replaced.
pub const CONFIRMATION_MESSAGE_FIELD: &str = "confirmationMessage";

/// One feature of the rich-text editor.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "feature", rename_all = "camelCase")]
pub enum RichTextFeature {
    FixedToolbar,
    #[serde(rename_all = "camelCase")]
    Heading {
        enabled_heading_sizes: Vec<String>,
    },
}

/// Editor configuration attached to a rich-text form field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct EditorConfig {
    pub features: Vec<RichTextFeature>,
}

/// A field of the form schema. Only `name` and `editor` are modeled; every
/// other property of the default field passes through `rest` untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FormField {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<EditorConfig>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// Field-type toggles of the form-builder plugin.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FieldToggles {
    pub payment: bool,
    pub upload: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FormBuilderConfig {
    pub fields: FieldToggles,
}

/// A registered CMS plugin.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum Plugin {
    FormBuilder(FormBuilderConfig),
    PayloadCloud,
}

/// The full plugin registry, in registration order.
pub fn plugins() -> Vec<Plugin> {
    vec![
        Plugin::FormBuilder(FormBuilderConfig {
            fields: FieldToggles {
                payment: false,
                upload: true,
            },
        }),
        Plugin::PayloadCloud,
    ]
}

/// Editor feature set for the confirmation message: the editor's root
/// features kept as-is, plus a fixed toolbar and heading levels 1 through 4.
pub fn confirmation_message_editor(root_features: Vec<RichTextFeature>) -> EditorConfig {
    let mut features = root_features;
    features.push(RichTextFeature::FixedToolbar);
    features.push(RichTextFeature::Heading {
        enabled_heading_sizes: ["h1", "h2", "h3", "h4"]
            .iter()
            .map(|size| size.to_string())
            .collect(),
    });
    EditorConfig { features }
}

/// Rewrites the default field list: the confirmation-message field gets the
/// fixed editor feature set, every other field is returned unchanged.
pub fn apply_form_overrides(default_fields: Vec<FormField>) -> Vec<FormField> {
    default_fields
        .into_iter()
        .map(|mut field| {
            if field.name == CONFIRMATION_MESSAGE_FIELD {
                let root = field
                    .editor
                    .take()
                    .map(|editor| editor.features)
                    .unwrap_or_default();
                field.editor = Some(confirmation_message_editor(root));
            }
            field
        })
        .collect()
}
