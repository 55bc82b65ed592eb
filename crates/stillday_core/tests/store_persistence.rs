use chrono::NaiveDate;
use stillday_core::store::migrations::latest_version;
use stillday_core::{
    GoalRepository, HabitRepository, KeyValueStore, NoteRepository, Rating, SqliteStore,
    StoreError,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[test]
fn collections_survive_store_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stillday.db");

    let habit_id = {
        let store = SqliteStore::open(&path).unwrap();
        let habits = HabitRepository::new(&store);
        let notes = NoteRepository::new(&store);

        let habit = habits.add_habit("Meditate").unwrap().unwrap();
        habits.toggle_completion(habit.id, day(5)).unwrap();
        notes.set_note(day(5), "calm day").unwrap();
        habit.id
    };

    let store = SqliteStore::open(&path).unwrap();
    let habits = HabitRepository::new(&store);
    let notes = NoteRepository::new(&store);

    assert_eq!(habits.habits().len(), 1);
    assert!(habits.is_completed(habit_id, day(5)));
    assert_eq!(notes.note_for_date(day(5)), "calm day");
}

#[test]
fn malformed_collection_payload_reads_as_empty() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.put("habits.v1", "{not json").unwrap();
    store.put("goals.v1", "[{\"wrong\": \"shape\"}]").unwrap();

    let habits = HabitRepository::new(&store);
    let goals = GoalRepository::new(&store);

    assert!(habits.habits().is_empty());
    assert!(goals.goals().is_empty());
    assert_eq!(habits.completion_rate(day(1)), 0);
}

#[test]
fn out_of_range_persisted_rating_drops_the_collection() {
    let store = SqliteStore::open_in_memory().unwrap();
    let goals = GoalRepository::new(&store);
    let goal = goals.add_goal("Focus").unwrap().unwrap();

    store
        .put(
            "goal_ratings.v1",
            &format!(
                "[{{\"goal_id\":\"{}\",\"date\":\"2024-01-01\",\"rating\":9}}]",
                goal.id
            ),
        )
        .unwrap();

    assert!(goals.ratings_for_goal(goal.id).is_empty());
    assert_eq!(goals.long_term_progress(goal.id), 0);
}

#[test]
fn mutation_after_recovery_replaces_the_bad_payload() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.put("goals.v1", "garbage").unwrap();

    let goals = GoalRepository::new(&store);
    let goal = goals.add_goal("Fresh start").unwrap().unwrap();

    assert_eq!(goals.goals(), vec![goal]);
    goals
        .set_rating(goals.goals()[0].id, day(2), Rating::new(3).unwrap())
        .unwrap();
    assert_eq!(goals.long_term_progress(goals.goals()[0].id), 60);
}

#[test]
fn newer_schema_version_is_rejected_on_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stillday.db");

    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(&format!(
            "PRAGMA user_version = {};",
            latest_version() + 1
        ))
        .unwrap();
    }

    match SqliteStore::open(&path) {
        Err(StoreError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        }) => {
            assert_eq!(db_version, latest_version() + 1);
            assert_eq!(latest_supported, latest_version());
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected unsupported schema version error"),
    }
}
