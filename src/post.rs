/// Post kind discriminator from the `PostTypeId` attribute.
/// The dump contains further kinds (wiki, moderator nomination, ...) that no
/// statistic consumes; they all collapse into `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostType {
    Question,
    Answer,
    Other,
}

impl PostType {
    pub fn from_attr(raw: &str) -> Self {
        match raw {
            "1" => PostType::Question,
            "2" => PostType::Answer,
            _ => PostType::Other,
        }
    }
}

/// One row of the dump, kept as the raw attribute set. Fields stay untyped
/// strings here; each extractor converts (and may reject) what it needs, so a
/// single bad attribute only excludes the record from that one statistic.
#[derive(Clone, Debug, Default)]
pub struct Post {
    pub id: Option<String>,
    pub post_type: Option<PostType>,
    pub parent_id: Option<String>,
    pub creation_date: Option<String>,
    pub score: Option<String>,
    pub body: Option<String>,
    pub tags: Option<String>,
    pub has_accepted_answer: bool,
}

impl Post {
    /// Route one XML attribute into the record. Unknown attributes are ignored.
    pub fn set_attr(&mut self, key: &[u8], value: String) {
        match key {
            b"Id" => self.id = Some(value),
            b"PostTypeId" => self.post_type = Some(PostType::from_attr(&value)),
            b"ParentId" => self.parent_id = Some(value),
            b"CreationDate" => self.creation_date = Some(value),
            b"Score" => self.score = Some(value),
            b"Body" => self.body = Some(value),
            b"Tags" => self.tags = Some(value),
            b"AcceptedAnswerId" => self.has_accepted_answer = true,
            _ => {}
        }
    }
}
