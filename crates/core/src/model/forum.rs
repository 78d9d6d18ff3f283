use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::TopicId;
use crate::model::listing::Searchable;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumTopic {
    pub id: TopicId,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub reply_count: u32,
    pub created_at: DateTime<Utc>,
}

impl Searchable for ForumTopic {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.author.as_str()]
    }
}
