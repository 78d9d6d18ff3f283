use campus_core::model::{ForumTopic, TopicId};

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForumTopicVm {
    pub id: TopicId,
    pub title: String,
    pub byline: String,
    pub replies_label: String,
}

impl From<&ForumTopic> for ForumTopicVm {
    fn from(topic: &ForumTopic) -> Self {
        Self {
            id: topic.id,
            title: topic.title.clone(),
            byline: format!("{} · {}", topic.author, format_datetime(topic.created_at)),
            replies_label: match topic.reply_count {
                0 => "No replies".to_string(),
                1 => "1 reply".to_string(),
                count => format!("{count} replies"),
            },
        }
    }
}

#[must_use]
pub fn map_forum_topics(topics: &[ForumTopic]) -> Vec<ForumTopicVm> {
    topics.iter().map(ForumTopicVm::from).collect()
}
