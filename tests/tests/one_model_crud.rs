use pretty_assertions::assert_eq;
use tests::{models::*, prelude::*, setup, setup_logged};
use tiny_orm::{Filters, Model, Primitive, Record, RecordSchema, Result, ValueRecord};
use tiny_orm_driver_sqlite::Connection;

#[test]
fn store_assigns_identity() {
    let (db, mut cursor) = setup();
    let model = db.model::<Student>().unwrap();
    model.create_table(&mut cursor).unwrap();

    let mut dave = Student::new("Dave Smith");
    assert!(assert_ok!(model.store(&mut cursor, &mut dave)));
    assert_eq!(dave.student_id, Some(1));

    let mut erin = Student::new("Erin Jones");
    assert!(assert_ok!(model.store(&mut cursor, &mut erin)));
    assert_eq!(erin.student_id, Some(2));

    assert_eq!(assert_ok!(model.all(&mut cursor)), [dave, erin]);
}

#[test]
fn get_by_identity() {
    let (db, mut cursor) = setup();
    let model = db.model::<Student>().unwrap();
    model.create_table(&mut cursor).unwrap();

    let mut dave = Student::new("Dave Smith");
    model.store(&mut cursor, &mut dave).unwrap();

    let found = assert_some!(assert_ok!(model.get(&mut cursor, 1)));
    assert_eq!(found, dave);
}

#[test]
fn get_missing_is_none() {
    let (db, mut cursor) = setup();
    let model = db.model::<Student>().unwrap();
    model.create_table(&mut cursor).unwrap();

    assert_none!(assert_ok!(model.get(&mut cursor, 42)));
}

#[test]
fn get_many_skips_missing() {
    let (db, mut cursor) = setup();
    let model = db.model::<Student>().unwrap();
    model.create_table(&mut cursor).unwrap();

    for name in ["a", "b", "c"] {
        model.store(&mut cursor, &mut Student::new(name)).unwrap();
    }

    let names: Vec<_> = assert_ok!(model.get_many(&mut cursor, &[1, 3, 9]))
        .into_iter()
        .map(|student| student.name)
        .collect();
    assert_eq!(names, ["a", "c"]);

    assert!(assert_ok!(model.get_many(&mut cursor, &[])).is_empty());
}

#[test]
fn store_again_updates_in_place() {
    let (db, mut cursor) = setup();
    let model = db.model::<Student>().unwrap();
    model.create_table(&mut cursor).unwrap();

    let mut dave = Student::new("Dave Smith");
    model.store(&mut cursor, &mut dave).unwrap();

    dave.name = "David Smith".to_string();
    model.store(&mut cursor, &mut dave).unwrap();

    assert_eq!(dave.student_id, Some(1));
    assert_eq!(assert_ok!(model.all(&mut cursor)), [dave]);
}

#[test]
fn store_with_chosen_identity() {
    let (db, mut cursor) = setup();
    let model = db.model::<Student>().unwrap();
    model.create_table(&mut cursor).unwrap();

    let mut student = Student {
        name: "Fixed".to_string(),
        student_id: Some(10),
    };
    model.store(&mut cursor, &mut student).unwrap();

    assert_eq!(assert_some!(model.get(&mut cursor, 10).unwrap()), student);
}

#[test]
fn generated_sql() {
    let (db, mut cursor) = setup_logged();
    let log = cursor.log();
    let model = db.model::<Student>().unwrap();
    model.create_table(&mut cursor).unwrap();
    log.clear();

    let mut dave = Student::new("Dave Smith");
    model.store(&mut cursor, &mut dave).unwrap();
    model.store(&mut cursor, &mut dave).unwrap();
    model.get(&mut cursor, 1).unwrap();

    assert_eq!(
        log.statements(),
        [
            "INSERT INTO [Student] ([name]) VALUES (:name);",
            "INSERT INTO [Student] ([name], [student_id]) VALUES (:name, :student_id) \
             ON CONFLICT ([student_id]) DO UPDATE SET [name] = excluded.[name];",
            "SELECT [name], [student_id] FROM [Student] WHERE [student_id] = :student_id;",
        ]
    );

    // Each store runs in its own savepoint
    assert_eq!(log.count("SAVEPOINT"), 2);
    assert_eq!(log.count("RELEASE SAVEPOINT"), 2);
}

#[test]
fn column_kinds_round_trip() {
    let (db, mut cursor) = setup();
    let model = db.model::<Setting>().unwrap();
    model.create_table(&mut cursor).unwrap();

    let mut on = Setting {
        setting_id: None,
        name: "on".to_string(),
        enabled: true,
        ratio: 0.25,
        note: Some("checked".to_string()),
    };
    let mut off = Setting {
        setting_id: None,
        name: "off".to_string(),
        enabled: false,
        ratio: 2.0,
        note: None,
    };
    model.store(&mut cursor, &mut on).unwrap();
    model.store(&mut cursor, &mut off).unwrap();

    assert_eq!(assert_ok!(model.all(&mut cursor)), [on, off]);
}

#[test]
fn filter_on_boolean_column() {
    let (db, mut cursor) = setup();
    let model = db.model::<Setting>().unwrap();
    model.create_table(&mut cursor).unwrap();

    for (name, enabled) in [("a", true), ("b", false), ("c", true)] {
        let mut setting = Setting {
            setting_id: None,
            name: name.to_string(),
            enabled,
            ratio: 1.0,
            note: None,
        };
        model.store(&mut cursor, &mut setting).unwrap();
    }

    let mut filters = Filters::new();
    filters.insert("enabled".to_string(), true.into());

    assert_eq!(setting_names(&model, &mut cursor, &filters), ["a", "c"]);
}

#[test]
fn find_with_null_and_lists() {
    let (db, mut cursor) = setup();
    let model = db.model::<Setting>().unwrap();
    model.create_table(&mut cursor).unwrap();

    for (name, note) in [("a", Some("x")), ("b", None), ("c", Some("y"))] {
        let mut setting = Setting {
            setting_id: None,
            name: name.to_string(),
            enabled: false,
            ratio: 1.0,
            note: note.map(str::to_string),
        };
        model.store(&mut cursor, &mut setting).unwrap();
    }

    let mut filters = Filters::new();
    filters.insert("note".to_string(), None::<&str>.into());
    assert_eq!(setting_names(&model, &mut cursor, &filters), ["b"]);

    filters.insert("note".to_string(), vec![Some("y"), None].into());
    assert_eq!(setting_names(&model, &mut cursor, &filters), ["b", "c"]);

    filters.insert("note".to_string(), Vec::<&str>::new().into());
    assert!(setting_names(&model, &mut cursor, &filters).is_empty());
}

fn setting_names(model: &Model<Setting>, cursor: &mut Connection, filters: &Filters) -> Vec<String> {
    model
        .find(cursor, filters)
        .unwrap()
        .into_iter()
        .map(|setting| setting.name)
        .collect()
}

#[test]
fn unique_constraint_is_enforced() {
    let (db, mut cursor) = setup();
    let model = db.model::<User>().unwrap();
    model.create_table(&mut cursor).unwrap();

    model.store(&mut cursor, &mut User::new("dave")).unwrap();

    let mut duplicate = User::new("dave");
    let err = assert_err!(model.store(&mut cursor, &mut duplicate));
    assert!(err.is_driver_operation_failed());
    assert_none!(duplicate.user_id);

    // The failed insert left nothing behind
    assert_eq!(assert_ok!(model.all(&mut cursor)).len(), 1);
}

#[test]
fn wrapper_forwards_to_model() {
    let (db, mut cursor) = setup();
    let model = db.model::<Student>().unwrap();
    model.create_table(&mut cursor).unwrap();

    let mut wrapper = model.wrap(&mut cursor);

    let mut dave = Student::new("Dave Smith");
    assert!(assert_ok!(wrapper.store(&mut dave)));
    assert_eq!(assert_ok!(wrapper.all()), [dave.clone()]);
    assert_eq!(assert_ok!(wrapper.get(1)), Some(dave.clone()));
    assert_eq!(assert_ok!(wrapper.get_many(&[1, 2])), [dave]);
}

#[test]
fn models_are_shared() {
    let (db, _) = setup();

    let a: Model<Student> = db.model().unwrap();
    let b: Model<Student> = db.model().unwrap();
    assert!(std::sync::Arc::ptr_eq(a.table(), b.table()));

    db.clear();
    let c: Model<Student> = db.model().unwrap();
    assert!(!std::sync::Arc::ptr_eq(a.table(), c.table()));
}

/// Forgets to convert one of its fields.
struct Forgetful {
    forgetful_id: Option<i64>,
}

impl Record for Forgetful {
    fn schema() -> RecordSchema {
        RecordSchema::new("Forgetful")
            .field("forgetful_id", Option::<i64>::field_type())
            .field("name", String::field_type())
    }

    fn identity(&self) -> Option<i64> {
        self.forgetful_id
    }

    fn set_identity(&mut self, identity: i64) {
        self.forgetful_id = Some(identity);
    }

    fn to_record(&self) -> ValueRecord {
        ValueRecord::new().with("forgetful_id", self.forgetful_id)
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Forgetful {
            forgetful_id: Primitive::load(record.take("forgetful_id"))?,
        })
    }
}

#[test]
fn store_requires_every_column() {
    let (db, mut cursor) = setup();
    let model = db.model::<Forgetful>().unwrap();
    model.create_table(&mut cursor).unwrap();

    let err = assert_err!(model.store(&mut cursor, &mut Forgetful { forgetful_id: None }));
    assert!(err.is_invalid_statement());
    assert_eq!(
        err.to_string(),
        "invalid statement: `Forgetful::name` is missing from the stored record"
    );
}
