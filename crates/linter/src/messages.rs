//! Message catalog.
//!
//! Every message a detection pass can report is a [`MessageArgs`] variant.
//! The variant carries exactly the arguments its text needs, so a message
//! id and its arguments cannot disagree.

use serde::{Deserialize, Serialize};
use ui5lint_types::{CodeFix, Position};

/// Rule names
pub mod rules {
    pub const NO_GLOBALS: &str = "no-globals";
    pub const NO_DEPRECATED_API: &str = "no-deprecated-api";
    pub const NO_PSEUDO_MODULES: &str = "no-pseudo-modules";
    pub const PARSING_ERROR: &str = "parsing-error";
}

/// Identifier of a message kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageId {
    NoGlobals,
    DeprecatedApiAccess,
    DeprecatedClass,
    DeprecatedComponent,
    DeprecatedFunctionCall,
    DeprecatedLibrary,
    DeprecatedModuleImport,
    DeprecatedProperty,
    PartiallyDeprecatedParameters,
    HtmlInXml,
    SvgInXml,
    NoDirectEnumAccess,
    NoDirectDatatypeAccess,
    ParsingError,
}

impl MessageId {
    /// Name of the rule the message belongs to
    #[must_use]
    pub const fn rule(self) -> &'static str {
        match self {
            Self::NoGlobals => rules::NO_GLOBALS,
            Self::DeprecatedApiAccess
            | Self::DeprecatedClass
            | Self::DeprecatedComponent
            | Self::DeprecatedFunctionCall
            | Self::DeprecatedLibrary
            | Self::DeprecatedModuleImport
            | Self::DeprecatedProperty
            | Self::PartiallyDeprecatedParameters
            | Self::HtmlInXml
            | Self::SvgInXml => rules::NO_DEPRECATED_API,
            Self::NoDirectEnumAccess | Self::NoDirectDatatypeAccess => rules::NO_PSEUDO_MODULES,
            Self::ParsingError => rules::PARSING_ERROR,
        }
    }
}

/// Arguments of a message, one variant per [`MessageId`].
///
/// `details` fields hold API documentation text that may contain
/// `{@link ...}` markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageArgs {
    NoGlobals {
        variable_name: String,
        namespace: String,
    },
    DeprecatedApiAccess {
        api_name: String,
        details: Option<String>,
    },
    DeprecatedClass {
        class_name: String,
        details: Option<String>,
    },
    DeprecatedComponent {
        component_name: String,
    },
    DeprecatedFunctionCall {
        function_name: String,
        additional_message: Option<String>,
        details: Option<String>,
    },
    DeprecatedLibrary {
        library_name: String,
    },
    DeprecatedModuleImport {
        module_name: String,
        details: Option<String>,
    },
    DeprecatedProperty {
        property_name: String,
        class_name: String,
        details: Option<String>,
    },
    PartiallyDeprecatedParameters {
        function_name: String,
        details: Option<String>,
    },
    HtmlInXml,
    SvgInXml,
    NoDirectEnumAccess {
        module_name: String,
    },
    NoDirectDatatypeAccess {
        module_name: String,
    },
    ParsingError {
        message: String,
    },
}

impl MessageArgs {
    #[must_use]
    pub const fn id(&self) -> MessageId {
        match self {
            Self::NoGlobals { .. } => MessageId::NoGlobals,
            Self::DeprecatedApiAccess { .. } => MessageId::DeprecatedApiAccess,
            Self::DeprecatedClass { .. } => MessageId::DeprecatedClass,
            Self::DeprecatedComponent { .. } => MessageId::DeprecatedComponent,
            Self::DeprecatedFunctionCall { .. } => MessageId::DeprecatedFunctionCall,
            Self::DeprecatedLibrary { .. } => MessageId::DeprecatedLibrary,
            Self::DeprecatedModuleImport { .. } => MessageId::DeprecatedModuleImport,
            Self::DeprecatedProperty { .. } => MessageId::DeprecatedProperty,
            Self::PartiallyDeprecatedParameters { .. } => MessageId::PartiallyDeprecatedParameters,
            Self::HtmlInXml => MessageId::HtmlInXml,
            Self::SvgInXml => MessageId::SvgInXml,
            Self::NoDirectEnumAccess { .. } => MessageId::NoDirectEnumAccess,
            Self::NoDirectDatatypeAccess { .. } => MessageId::NoDirectDatatypeAccess,
            Self::ParsingError { .. } => MessageId::ParsingError,
        }
    }

    /// Human-readable message text
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NoGlobals {
                variable_name,
                namespace,
            } => format!("Access of global variable '{variable_name}' ({namespace})"),
            Self::DeprecatedApiAccess { api_name, .. } => {
                format!("Use of deprecated API '{api_name}'")
            }
            Self::DeprecatedClass { class_name, .. } => {
                format!("Use of deprecated class '{class_name}'")
            }
            Self::DeprecatedComponent { component_name } => {
                format!("Use of deprecated component '{component_name}'")
            }
            Self::DeprecatedFunctionCall {
                function_name,
                additional_message,
                ..
            } => match additional_message {
                Some(additional) => {
                    format!("Call to deprecated function '{function_name}' {additional}")
                }
                None => format!("Call to deprecated function '{function_name}'"),
            },
            Self::DeprecatedLibrary { library_name } => {
                format!("Use of deprecated library '{library_name}'")
            }
            Self::DeprecatedModuleImport { module_name, .. } => {
                format!("Import of deprecated module '{module_name}'")
            }
            Self::DeprecatedProperty {
                property_name,
                class_name,
                ..
            } => format!("Use of deprecated property '{property_name}' of class '{class_name}'"),
            Self::PartiallyDeprecatedParameters { function_name, .. } => {
                format!("Call to '{function_name}' with deprecated parameters")
            }
            Self::HtmlInXml => {
                "Usage of native HTML in XML Views/Fragments is deprecated".to_string()
            }
            Self::SvgInXml => "Usage of SVG in XML Views/Fragments is deprecated".to_string(),
            Self::NoDirectEnumAccess { module_name } => {
                format!("Deprecated access to enum pseudo module '{module_name}'")
            }
            Self::NoDirectDatatypeAccess { module_name } => {
                format!("Deprecated access to DataType pseudo module '{module_name}'")
            }
            Self::ParsingError { message } => message.clone(),
        }
    }

    /// Raw detail text, before link resolution
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::DeprecatedApiAccess { details, .. }
            | Self::DeprecatedClass { details, .. }
            | Self::DeprecatedFunctionCall { details, .. }
            | Self::DeprecatedModuleImport { details, .. }
            | Self::DeprecatedProperty { details, .. }
            | Self::PartiallyDeprecatedParameters { details, .. } => details.as_deref(),
            Self::HtmlInXml => Some(
                "Use the {@link sap.ui.core.HTML} control or an XML fragment with UI5 controls instead",
            ),
            _ => None,
        }
    }
}

/// Kind of UI5 entity a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ui5TypeKind {
    Module,
    Namespace,
    Class,
    Enum,
    Function,
    Method,
    Property,
}

/// The UI5 entity a message refers to, for consumers such as autofix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ui5TypeInfo {
    pub kind: Ui5TypeKind,
    /// Fully qualified name, e.g. `sap.ui.core.Core.attachInit`
    pub name: String,
    /// Module path that exports the entity, e.g. `sap/ui/core/Core`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
}

/// A message as reported by a detection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLintMessage {
    pub args: MessageArgs,
    /// 1-based position; messages without one bypass deduplication and
    /// suppression
    pub position: Option<Position>,
    pub fix: Option<CodeFix>,
    pub type_info: Option<Ui5TypeInfo>,
}

impl RawLintMessage {
    #[must_use]
    pub const fn new(args: MessageArgs, position: Option<Position>) -> Self {
        Self {
            args,
            position,
            fix: None,
            type_info: None,
        }
    }

    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.args.id()
    }

    #[must_use]
    pub const fn rule(&self) -> &'static str {
        self.args.id().rule()
    }
}

/// A message of a lint result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintMessage {
    pub id: MessageId,
    pub rule: &'static str,
    pub message: String,
    /// Detail text with resolved links, only kept when details are enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<CodeFix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_info: Option<Ui5TypeInfo>,
}

impl LintMessage {
    pub(crate) fn from_raw(raw: RawLintMessage, with_details: bool) -> Self {
        let message_details = if with_details {
            raw.args.details().map(crate::resolve_links)
        } else {
            None
        };
        Self {
            id: raw.id(),
            rule: raw.rule(),
            message: raw.args.message(),
            message_details,
            position: raw.position,
            fix: raw.fix,
            type_info: raw.type_info,
        }
    }
}
