use super::{NodeId, User};
use serde::{Deserialize, Serialize};

// GitHub API docs: https://developer.github.com/v3/reactions/

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionType {
    #[serde(rename = "+1")]
    PlusOne,
    #[serde(rename = "-1")]
    MinusOne,
    Laugh,
    Confused,
    Heart,
    Hooray,
    Rocket,
    Eyes,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Reaction {
    pub id: u64,
    pub node_id: NodeId,
    pub user: User,
    pub content: ReactionType,
}

#[cfg(test)]
mod test {
    use super::ReactionType;

    #[test]
    fn reaction_content_wire_names() {
        assert_eq!(
            serde_json::to_string(&ReactionType::PlusOne).unwrap(),
            r#""+1""#
        );
        assert_eq!(
            serde_json::to_string(&ReactionType::Heart).unwrap(),
            r#""heart""#
        );

        let parsed: ReactionType = serde_json::from_str(r#""-1""#).unwrap();
        assert_eq!(parsed, ReactionType::MinusOne);
    }
}
