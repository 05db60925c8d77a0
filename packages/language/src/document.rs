//! JSON encoding of language documents.
//!
//! Documents on disk are either a bare [`Act`] or a tagged
//! [`LanguageComponent`] whose category is `Act`. Both forms load.

use crate::ast::{Act, LanguageComponent};
use crate::error::{DocumentError, DocumentResult};

impl Act {
    /// Loads either document shape. A root object carrying a `category` key
    /// is a tagged component; anything else must be a bare act, and its own
    /// parse error is reported.
    pub fn from_json(source: &str) -> DocumentResult<Self> {
        let root: serde_json::Value = serde_json::from_str(source)?;

        if root.get("category").is_none() {
            return Ok(serde_json::from_str(source)?);
        }

        match LanguageComponent::from_json(source)? {
            LanguageComponent::Act(act) => Ok(act),
            other => Err(DocumentError::NotAnAct { found: other.kind() }),
        }
    }

    pub fn to_json_pretty(&self) -> DocumentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl LanguageComponent {
    pub fn from_json(source: &str) -> DocumentResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self) -> DocumentResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;

    fn sample_act() -> Act {
        Act::new(vec![Scene::Text(TextScene {
            title: "Intro".to_string(),
            comment: "Shows a greeting".to_string(),
            duration: NumberExpression::value(2.0),
            pre_commands: CommandSequence::new(vec![Statement::set(
                "curr_duration",
                NumberExpression::add(NumberExpression::value(1.0), NumberExpression::Gap),
            )]),
            post_commands: CommandSequence::empty(),
            text: TextExpression::value("Hello"),
        })])
    }

    #[test]
    fn test_act_json_round_trip() {
        let act = sample_act();
        let json = act.to_json_pretty().unwrap();
        assert_eq!(Act::from_json(&json).unwrap(), act);
    }

    #[test]
    fn test_tagged_act_loads() {
        let component = LanguageComponent::Act(sample_act());
        let json = component.to_json().unwrap();
        assert!(json.contains("\"category\":\"Act\""));
        assert_eq!(Act::from_json(&json).unwrap(), sample_act());
    }

    #[test]
    fn test_non_act_root_is_rejected() {
        let component: LanguageComponent = NumberExpression::value(3.0).into();
        let json = component.to_json().unwrap();

        match Act::from_json(&json) {
            Err(DocumentError::NotAnAct { found }) => {
                assert_eq!(found, crate::ComponentKind::NumberValue)
            }
            other => panic!("Expected NotAnAct, got {:?}", other),
        }
    }

    #[test]
    fn test_bare_act_error_names_the_real_cause() {
        let mut json: serde_json::Value =
            serde_json::from_str(&sample_act().to_json_pretty().unwrap()).unwrap();
        json["scenes"][0]["duration"] = serde_json::json!({
            "type": "Divide",
            "op1": { "type": "Value", "value": 1.0 },
            "op2": { "type": "Value", "value": 2.0 },
        });

        let error = Act::from_json(&json.to_string()).unwrap_err();
        let message = error.to_string();

        assert!(matches!(error, DocumentError::Json(_)));
        assert!(message.contains("Divide"), "{}", message);
        assert!(!message.contains("category"), "{}", message);
    }

    #[test]
    fn test_demo_document_loads() {
        let act = Act::from_json(include_str!("../../../demos/gangnam.act.json")).unwrap();

        assert_eq!(act.scenes.len(), 2);
        assert_eq!(act.scenes[0].title(), "Example Video Scene");
    }
}
