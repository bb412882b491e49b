use pretty_assertions::assert_eq;
use tests::{models::*, prelude::*, setup};
use tiny_orm::{Db, Filters, Id, Model, Operand, Record};
use tiny_orm_driver_sqlite::Connection;

struct Thread {
    comments: Model<Comment>,
    dave: User,
    erin: User,
}

fn thread(db: &Db, cursor: &mut Connection) -> Thread {
    let users = db.model::<User>().unwrap();
    let comments = db.model::<Comment>().unwrap();
    users.create_table(cursor).unwrap();
    comments.create_table(cursor).unwrap();

    let mut dave = User::new("dave");
    let mut erin = User::new("erin");
    users.store(cursor, &mut dave).unwrap();
    users.store(cursor, &mut erin).unwrap();

    let dave_id = Id::new(dave.user_id.unwrap());
    let erin_id = Id::new(erin.user_id.unwrap());

    let mut root = Comment::new(dave_id, "first");
    comments.store(cursor, &mut root).unwrap();

    let mut reply = Comment::reply(&root, erin_id, "second");
    comments.store(cursor, &mut reply).unwrap();

    let mut nested = Comment::reply(&reply, dave_id, "third");
    comments.store(cursor, &mut nested).unwrap();

    Thread {
        comments,
        dave,
        erin,
    }
}

fn contents(comments: Vec<Comment>) -> Vec<String> {
    comments.into_iter().map(|comment| comment.content).collect()
}

#[test]
fn references_round_trip() {
    let (db, mut cursor) = setup();
    let thread = thread(&db, &mut cursor);

    let nested = assert_some!(assert_ok!(thread.comments.get(&mut cursor, 3)));
    assert_eq!(nested.root, Some(Id::new(1)));
    assert_eq!(nested.parent, Some(Id::new(2)));
    assert_eq!(nested.user.get(), 1);

    let root = assert_some!(assert_ok!(thread.comments.get(&mut cursor, 1)));
    assert_eq!(root.root, None);
    assert_eq!(root.parent, None);
}

#[test]
fn find_by_record() {
    let (db, mut cursor) = setup();
    let thread = thread(&db, &mut cursor);

    let mut filters = Filters::new();
    filters.insert("user".to_string(), thread.dave.record_ref().into());

    assert_eq!(
        contents(assert_ok!(thread.comments.find(&mut cursor, &filters))),
        ["first", "third"]
    );
}

#[test]
fn find_by_records() {
    let (db, mut cursor) = setup();
    let thread = thread(&db, &mut cursor);

    let mut filters = Filters::new();
    filters.insert(
        "user".to_string(),
        vec![thread.dave.record_ref(), thread.erin.record_ref()].into(),
    );

    assert_eq!(
        contents(assert_ok!(thread.comments.find(&mut cursor, &filters))),
        ["first", "second", "third"]
    );
}

#[test]
fn find_by_id_and_null() {
    let (db, mut cursor) = setup();
    let thread = thread(&db, &mut cursor);

    let mut filters = Filters::new();
    filters.insert("root".to_string(), Operand::from(Id::<Comment>::new(1)));
    filters.insert("user".to_string(), thread.erin.record_ref().into());
    assert_eq!(
        contents(assert_ok!(thread.comments.find(&mut cursor, &filters))),
        ["second"]
    );

    let mut filters = Filters::new();
    filters.insert("parent".to_string(), None::<i64>.into());
    assert_eq!(
        contents(assert_ok!(thread.comments.find(&mut cursor, &filters))),
        ["first"]
    );
}

#[test]
fn wrong_values_are_rejected() {
    let (db, mut cursor) = setup();
    let thread = thread(&db, &mut cursor);

    // A plain identity instead of a record
    let mut filters = Filters::new();
    filters.insert("user".to_string(), 1i64.into());
    let err = assert_err!(thread.comments.find(&mut cursor, &filters));
    assert!(err.is_invalid_foreign_key_value());
    assert_eq!(
        err.to_string(),
        "invalid foreign key value for `user`: expected a record of `User`, got a i64"
    );

    // A record of the wrong type
    let mut filters = Filters::new();
    filters.insert("user".to_string(), Id::<Comment>::new(1).into());
    let err = assert_err!(thread.comments.find(&mut cursor, &filters));
    assert!(err.is_invalid_foreign_key_value());

    // A record that was never stored
    let mut filters = Filters::new();
    filters.insert("user".to_string(), User::new("nobody").record_ref().into());
    let err = assert_err!(thread.comments.find(&mut cursor, &filters));
    assert!(err.is_invalid_foreign_key_value());

    // A record on a plain column
    let mut filters = Filters::new();
    filters.insert("content".to_string(), thread.dave.record_ref().into());
    let err = assert_err!(thread.comments.find(&mut cursor, &filters));
    assert!(err.is_invalid_foreign_key_value());
}

#[test]
fn missing_reference_fails_to_store() {
    let (db, mut cursor) = setup();
    let thread = thread(&db, &mut cursor);

    let mut orphan = Comment::new(Id::new(99), "nobody wrote this");
    let err = assert_err!(thread.comments.store(&mut cursor, &mut orphan));

    assert!(err.is_driver_operation_failed());
    assert_none!(orphan.comment_id);
    assert_eq!(assert_ok!(thread.comments.all(&mut cursor)).len(), 3);
}

#[test]
fn subtable_children_filter_by_parent() {
    let (db, mut cursor) = setup();
    let model = db.model::<MainTable>().unwrap();
    model.create_table(&mut cursor).unwrap();

    let mut first = MainTable {
        data: vec!["a".into()],
        ..MainTable::default()
    };
    let mut second = MainTable {
        data: vec!["b".into(), "c".into()],
        ..MainTable::default()
    };
    model.store(&mut cursor, &mut first).unwrap();
    model.store(&mut cursor, &mut second).unwrap();

    // Connecting the subtable made the connector a foreign key of the child
    let mut filters = Filters::new();
    filters.insert("main_table_id".to_string(), second.record_ref().into());

    let rows = assert_ok!(db.model::<SubList>().unwrap().find(&mut cursor, &filters));
    let data: Vec<_> = rows.into_iter().map(|row| row.data).collect();
    assert_eq!(data, ["b", "c"]);
}
