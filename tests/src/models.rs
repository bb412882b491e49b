//! Record types used across the integration tests.

use indexmap::IndexMap;
use tiny_orm::{Id, Primitive, Record, RecordSchema, Result, Subtable, ValueRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,

    pub student_id: Option<i64>,
}

impl Student {
    pub fn new(name: &str) -> Student {
        Student {
            name: name.to_string(),
            student_id: None,
        }
    }
}

impl Record for Student {
    fn schema() -> RecordSchema {
        RecordSchema::new("Student")
            .field("name", String::field_type())
            .field("student_id", Option::<i64>::field_type())
    }

    fn identity(&self) -> Option<i64> {
        self.student_id
    }

    fn set_identity(&mut self, identity: i64) {
        self.student_id = Some(identity);
    }

    fn to_record(&self) -> ValueRecord {
        ValueRecord::new()
            .with("name", &self.name)
            .with("student_id", self.student_id)
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Student {
            name: Primitive::load(record.take("name"))?,
            student_id: Primitive::load(record.take("student_id"))?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub email: String,
    pub username: String,
    pub user_id: Option<i64>,
}

impl User {
    pub fn new(username: &str) -> User {
        User {
            email: format!("{username}@example.com"),
            username: username.to_string(),
            user_id: None,
        }
    }
}

impl Record for User {
    fn schema() -> RecordSchema {
        RecordSchema::new("User")
            .field("email", String::field_type())
            .field("username", String::field_type())
            .field("user_id", Option::<i64>::field_type())
            .unique(["username"])
            .unique(["email"])
    }

    fn identity(&self) -> Option<i64> {
        self.user_id
    }

    fn set_identity(&mut self, identity: i64) {
        self.user_id = Some(identity);
    }

    fn to_record(&self) -> ValueRecord {
        ValueRecord::new()
            .with("email", &self.email)
            .with("username", &self.username)
            .with("user_id", self.user_id)
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(User {
            email: Primitive::load(record.take("email"))?,
            username: Primitive::load(record.take("username"))?,
            user_id: Primitive::load(record.take("user_id"))?,
        })
    }
}

/// A threaded comment, referencing its thread root and direct parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub comment_id: Option<i64>,
    pub root: Option<Id<Comment>>,
    pub parent: Option<Id<Comment>>,
    pub user: Id<User>,
    pub content: String,
}

impl Comment {
    pub fn new(user: Id<User>, content: &str) -> Comment {
        Comment {
            comment_id: None,
            root: None,
            parent: None,
            user,
            content: content.to_string(),
        }
    }

    /// A reply to `parent`, in the same thread.
    pub fn reply(parent: &Comment, user: Id<User>, content: &str) -> Comment {
        let parent_id = parent.comment_id.map(Id::new);

        Comment {
            comment_id: None,
            root: parent.root.or(parent_id),
            parent: parent_id,
            user,
            content: content.to_string(),
        }
    }
}

impl Record for Comment {
    fn schema() -> RecordSchema {
        RecordSchema::new("Comment")
            .field("comment_id", Option::<i64>::field_type())
            .field("root", Option::<Id<Comment>>::field_type())
            .field("parent", Option::<Id<Comment>>::field_type())
            .field("user", Id::<User>::field_type())
            .field("content", String::field_type())
    }

    fn identity(&self) -> Option<i64> {
        self.comment_id
    }

    fn set_identity(&mut self, identity: i64) {
        self.comment_id = Some(identity);
    }

    fn to_record(&self) -> ValueRecord {
        ValueRecord::new()
            .with("comment_id", self.comment_id)
            .with("root", self.root)
            .with("parent", self.parent)
            .with("user", self.user)
            .with("content", &self.content)
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Comment {
            comment_id: Primitive::load(record.take("comment_id"))?,
            root: Primitive::load(record.take("root"))?,
            parent: Primitive::load(record.take("parent"))?,
            user: Primitive::load(record.take("user"))?,
            content: Primitive::load(record.take("content"))?,
        })
    }
}

/// Rows of [`MainTable::data`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubList {
    pub sub_list_id: Option<i64>,
    pub main_table_id: i64,
    pub data: String,
}

impl Record for SubList {
    fn schema() -> RecordSchema {
        RecordSchema::new("SubList")
            .field("sub_list_id", Option::<i64>::field_type())
            .field("main_table_id", i64::field_type())
            .field("data", String::field_type())
    }

    fn identity(&self) -> Option<i64> {
        self.sub_list_id
    }

    fn set_identity(&mut self, identity: i64) {
        self.sub_list_id = Some(identity);
    }

    fn to_record(&self) -> ValueRecord {
        ValueRecord::new()
            .with("sub_list_id", self.sub_list_id)
            .with("main_table_id", self.main_table_id)
            .with("data", &self.data)
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(SubList {
            sub_list_id: Primitive::load(record.take("sub_list_id"))?,
            main_table_id: Primitive::load(record.take("main_table_id"))?,
            data: Primitive::load(record.take("data"))?,
        })
    }
}

/// Rows of [`MainTable::datadict`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubDict {
    pub sub_dict_id: Option<i64>,
    pub main_table_id: i64,
    pub key: String,
    pub value: String,
}

impl Record for SubDict {
    fn schema() -> RecordSchema {
        RecordSchema::new("SubDict")
            .field("sub_dict_id", Option::<i64>::field_type())
            .field("main_table_id", i64::field_type())
            .field("key", String::field_type())
            .field("value", String::field_type())
    }

    fn identity(&self) -> Option<i64> {
        self.sub_dict_id
    }

    fn set_identity(&mut self, identity: i64) {
        self.sub_dict_id = Some(identity);
    }

    fn to_record(&self) -> ValueRecord {
        ValueRecord::new()
            .with("sub_dict_id", self.sub_dict_id)
            .with("main_table_id", self.main_table_id)
            .with("key", &self.key)
            .with("value", &self.value)
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(SubDict {
            sub_dict_id: Primitive::load(record.take("sub_dict_id"))?,
            main_table_id: Primitive::load(record.take("main_table_id"))?,
            key: Primitive::load(record.take("key"))?,
            value: Primitive::load(record.take("value"))?,
        })
    }
}

/// A record with a list-shaped and a map-shaped subtable field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MainTable {
    pub main_table_id: Option<i64>,
    pub data: Vec<String>,
    pub datadict: IndexMap<String, String>,
}

impl Record for MainTable {
    fn schema() -> RecordSchema {
        RecordSchema::new("MainTable")
            .field("main_table_id", Option::<i64>::field_type())
            .field("data", Vec::<String>::field_type())
            .field("datadict", IndexMap::<String, String>::field_type())
            .subtable(Subtable::new("data", SubList::record_type()))
            .subtable(
                Subtable::new("datadict", SubDict::record_type())
                    .value_field("value")
                    .pivot("key"),
            )
    }

    fn identity(&self) -> Option<i64> {
        self.main_table_id
    }

    fn set_identity(&mut self, identity: i64) {
        self.main_table_id = Some(identity);
    }

    fn to_record(&self) -> ValueRecord {
        ValueRecord::new()
            .with("main_table_id", self.main_table_id)
            .with("data", self.data.clone())
            .with("datadict", self.datadict.clone())
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(MainTable {
            main_table_id: Primitive::load(record.take("main_table_id"))?,
            data: Primitive::load(record.take("data"))?,
            datadict: Primitive::load(record.take("datadict"))?,
        })
    }
}

/// One person credited on an [`Article`], in some role.
#[derive(Debug, Clone, PartialEq)]
pub struct Credit {
    pub credit_id: Option<i64>,
    pub article_id: i64,
    pub role: String,
    pub name: String,
}

impl Record for Credit {
    fn schema() -> RecordSchema {
        RecordSchema::new("Credit")
            .field("credit_id", Option::<i64>::field_type())
            .field("article_id", i64::field_type())
            .field("role", String::field_type())
            .field("name", String::field_type())
    }

    fn identity(&self) -> Option<i64> {
        self.credit_id
    }

    fn set_identity(&mut self, identity: i64) {
        self.credit_id = Some(identity);
    }

    fn to_record(&self) -> ValueRecord {
        ValueRecord::new()
            .with("credit_id", self.credit_id)
            .with("article_id", self.article_id)
            .with("role", &self.role)
            .with("name", &self.name)
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Credit {
            credit_id: Primitive::load(record.take("credit_id"))?,
            article_id: Primitive::load(record.take("article_id"))?,
            role: Primitive::load(record.take("role"))?,
            name: Primitive::load(record.take("name"))?,
        })
    }
}

/// Two subtable fields sharing the `Credit` table, told apart by role.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Article {
    pub article_id: Option<i64>,
    pub title: String,
    pub authors: Vec<String>,
    pub editors: Vec<String>,
}

impl Record for Article {
    fn schema() -> RecordSchema {
        RecordSchema::new("Article")
            .field("article_id", Option::<i64>::field_type())
            .field("title", String::field_type())
            .field("authors", Vec::<String>::field_type())
            .field("editors", Vec::<String>::field_type())
            .subtable(
                Subtable::new("authors", Credit::record_type())
                    .value_field("name")
                    .selector("role", "author"),
            )
            .subtable(
                Subtable::new("editors", Credit::record_type())
                    .value_field("name")
                    .selector("role", "editor"),
            )
    }

    fn identity(&self) -> Option<i64> {
        self.article_id
    }

    fn set_identity(&mut self, identity: i64) {
        self.article_id = Some(identity);
    }

    fn to_record(&self) -> ValueRecord {
        ValueRecord::new()
            .with("article_id", self.article_id)
            .with("title", &self.title)
            .with("authors", self.authors.clone())
            .with("editors", self.editors.clone())
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Article {
            article_id: Primitive::load(record.take("article_id"))?,
            title: Primitive::load(record.take("title"))?,
            authors: Primitive::load(record.take("authors"))?,
            editors: Primitive::load(record.take("editors"))?,
        })
    }
}

/// Covers the boolean, float and optional text column kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub setting_id: Option<i64>,
    pub name: String,
    pub enabled: bool,
    pub ratio: f64,
    pub note: Option<String>,
}

impl Record for Setting {
    fn schema() -> RecordSchema {
        RecordSchema::new("Setting")
            .field("setting_id", Option::<i64>::field_type())
            .field("name", String::field_type())
            .field("enabled", bool::field_type())
            .field("ratio", f64::field_type())
            .field("note", Option::<String>::field_type())
    }

    fn identity(&self) -> Option<i64> {
        self.setting_id
    }

    fn set_identity(&mut self, identity: i64) {
        self.setting_id = Some(identity);
    }

    fn to_record(&self) -> ValueRecord {
        ValueRecord::new()
            .with("setting_id", self.setting_id)
            .with("name", &self.name)
            .with("enabled", self.enabled)
            .with("ratio", self.ratio)
            .with("note", self.note.clone())
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Setting {
            setting_id: Primitive::load(record.take("setting_id"))?,
            name: Primitive::load(record.take("name"))?,
            enabled: Primitive::load(record.take("enabled"))?,
            ratio: Primitive::load(record.take("ratio"))?,
            note: Primitive::load(record.take("note"))?,
        })
    }
}
