//! Experience actions: the effects applied when an experience matches.
//!
//! Like conditions, actions are a closed set discriminated by `$type`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Action {
    #[serde(rename = "RedirectAction")]
    Redirect(RedirectAction),
    #[serde(rename = "UpdateTextAction")]
    UpdateText(UpdateTextAction),
    #[serde(rename = "HideElementAction")]
    HideElement(HideElementAction),
    #[serde(rename = "ShowElementAction")]
    ShowElement(ShowElementAction),
    #[serde(rename = "InsertHtmlAction")]
    InsertHtml(InsertHtmlAction),
}

impl Action {
    /// The `$type` discriminator of this variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Redirect(_) => "RedirectAction",
            Self::UpdateText(_) => "UpdateTextAction",
            Self::HideElement(_) => "HideElementAction",
            Self::ShowElement(_) => "ShowElementAction",
            Self::InsertHtml(_) => "InsertHtmlAction",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RedirectAction {
    /// Absolute http(s) URL to navigate to.
    pub page_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateTextAction {
    pub selector: String,
    pub new_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HideElementAction {
    pub selector: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShowElementAction {
    pub selector: String,
}

/// Where inserted HTML goes relative to the selected element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsertPosition {
    Before,
    #[default]
    After,
    Replace,
    PrependInside,
    AppendInside,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsertHtmlAction {
    pub selector: String,
    pub html: String,
    pub position: InsertPosition,
}

impl From<RedirectAction> for Action {
    fn from(a: RedirectAction) -> Self {
        Self::Redirect(a)
    }
}

impl From<UpdateTextAction> for Action {
    fn from(a: UpdateTextAction) -> Self {
        Self::UpdateText(a)
    }
}

impl From<HideElementAction> for Action {
    fn from(a: HideElementAction) -> Self {
        Self::HideElement(a)
    }
}

impl From<ShowElementAction> for Action {
    fn from(a: ShowElementAction) -> Self {
        Self::ShowElement(a)
    }
}

impl From<InsertHtmlAction> for Action {
    fn from(a: InsertHtmlAction) -> Self {
        Self::InsertHtml(a)
    }
}
