use super::{Validate, ValidationErrors, check_required, is_http_url};
use crate::models::action::{
    Action, HideElementAction, InsertHtmlAction, RedirectAction, ShowElementAction,
    UpdateTextAction,
};

impl Validate for Action {
    fn validate(&self) -> ValidationErrors {
        match self {
            Self::Redirect(a) => a.validate(),
            Self::UpdateText(a) => a.validate(),
            Self::HideElement(a) => a.validate(),
            Self::ShowElement(a) => a.validate(),
            Self::InsertHtml(a) => a.validate(),
        }
    }
}

impl Validate for RedirectAction {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.page_url.trim().is_empty() {
            errors.add("pageUrl", "Page URL is required");
        } else if !is_http_url(&self.page_url) {
            errors.add("pageUrl", "Page URL must be a valid URL");
        }
        errors
    }
}

impl Validate for UpdateTextAction {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        check_required(&mut errors, "selector", &self.selector, "Selector is required");
        check_required(&mut errors, "newText", &self.new_text, "New text is required");
        errors
    }
}

impl Validate for HideElementAction {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        check_required(&mut errors, "selector", &self.selector, "Selector is required");
        errors
    }
}

impl Validate for ShowElementAction {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        check_required(&mut errors, "selector", &self.selector, "Selector is required");
        errors
    }
}

// `position` needs no rule: InsertPosition only has valid values.
impl Validate for InsertHtmlAction {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        check_required(&mut errors, "selector", &self.selector, "Selector is required");
        check_required(&mut errors, "html", &self.html, "HTML content is required");
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::action::InsertPosition;

    #[test]
    fn insert_html_requires_selector_and_html() {
        let ok = InsertHtmlAction {
            selector: "#hero".into(),
            html: "<p>Hi</p>".into(),
            position: InsertPosition::AppendInside,
        };
        assert!(ok.validate().is_empty());

        let errors = InsertHtmlAction::default().validate();
        assert!(errors.has_field("selector"));
        assert!(errors.has_field("html"));
    }

    #[test]
    fn insert_html_rejects_unknown_position_on_the_wire() {
        let json = r#"{"$type":"InsertHtmlAction","selector":".x","html":"<b/>","position":"Sideways"}"#;
        assert!(serde_json::from_str::<Action>(json).is_err());

        let json = r#"{"$type":"InsertHtmlAction","selector":".x","html":"<b/>"}"#;
        match serde_json::from_str::<Action>(json).unwrap() {
            Action::InsertHtml(a) => assert_eq!(a.position, InsertPosition::After),
            other => panic!("unexpected action {}", other.type_name()),
        }
    }

    #[test]
    fn redirect_needs_absolute_http_url() {
        let ok = RedirectAction {
            page_url: "https://acme.com/sale".into(),
        };
        assert!(ok.validate().is_empty());

        let relative = RedirectAction {
            page_url: "/sale".into(),
        };
        assert_eq!(relative.validate().summary(), "Page URL must be a valid URL");
        assert_eq!(
            RedirectAction::default().validate().summary(),
            "Page URL is required"
        );
    }

    #[test]
    fn dispatch_reaches_every_variant() {
        let invalid: Vec<Action> = vec![
            RedirectAction::default().into(),
            UpdateTextAction::default().into(),
            HideElementAction::default().into(),
            ShowElementAction::default().into(),
            InsertHtmlAction::default().into(),
        ];
        for action in invalid {
            assert!(
                !action.validate().is_empty(),
                "{} defaults should be invalid",
                action.type_name()
            );
        }
    }
}
