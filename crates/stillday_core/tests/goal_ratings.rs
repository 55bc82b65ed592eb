use chrono::NaiveDate;
use stillday_core::date::last_n_days;
use stillday_core::{trend_points, GoalRepository, Rating, RatingChange, SqliteStore};
use uuid::Uuid;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn rating(value: u8) -> Rating {
    Rating::new(value).unwrap()
}

#[test]
fn add_goal_persists_trimmed_name() {
    let store = SqliteStore::open_in_memory().unwrap();
    let repo = GoalRepository::new(&store);

    let goal = repo.add_goal(" Focus ").unwrap().unwrap();
    assert_eq!(goal.name, "Focus");
    assert_eq!(repo.goals(), vec![goal]);
}

#[test]
fn blank_goal_name_is_a_silent_no_op() {
    let store = SqliteStore::open_in_memory().unwrap();
    let repo = GoalRepository::new(&store);

    assert!(repo.add_goal("  ").unwrap().is_none());
    assert!(repo.goals().is_empty());
}

#[test]
fn set_rating_walks_the_three_way_branch() {
    let store = SqliteStore::open_in_memory().unwrap();
    let repo = GoalRepository::new(&store);
    let goal = repo.add_goal("Focus").unwrap().unwrap();
    let date = day(2024, 1, 1);

    let inserted = repo.set_rating(goal.id, date, rating(4)).unwrap();
    assert_eq!(inserted, RatingChange::Inserted);
    assert_eq!(repo.rating_for_date(goal.id, date), Some(rating(4)));

    let updated = repo.set_rating(goal.id, date, rating(2)).unwrap();
    assert_eq!(updated, RatingChange::Updated);
    assert_eq!(repo.rating_for_date(goal.id, date), Some(rating(2)));

    // Same value again clears the entry (click-to-clear).
    let cleared = repo.set_rating(goal.id, date, rating(2)).unwrap();
    assert_eq!(cleared, RatingChange::Cleared);
    assert_eq!(repo.rating_for_date(goal.id, date), None);
}

#[test]
fn repeating_the_same_rating_twice_leaves_no_entry() {
    let store = SqliteStore::open_in_memory().unwrap();
    let repo = GoalRepository::new(&store);
    let goal = repo.add_goal("Sleep").unwrap().unwrap();
    let date = day(2024, 3, 10);

    repo.set_rating(goal.id, date, rating(5)).unwrap();
    repo.set_rating(goal.id, date, rating(5)).unwrap();

    assert_eq!(repo.rating_for_date(goal.id, date), None);
    assert!(repo.ratings_for_goal(goal.id).is_empty());
}

#[test]
fn ratings_are_scoped_per_goal_and_date() {
    let store = SqliteStore::open_in_memory().unwrap();
    let repo = GoalRepository::new(&store);
    let focus = repo.add_goal("Focus").unwrap().unwrap();
    let sleep = repo.add_goal("Sleep").unwrap().unwrap();

    repo.set_rating(focus.id, day(2024, 1, 1), rating(4)).unwrap();
    repo.set_rating(focus.id, day(2024, 1, 2), rating(3)).unwrap();
    repo.set_rating(sleep.id, day(2024, 1, 1), rating(5)).unwrap();

    assert_eq!(repo.ratings_for_goal(focus.id).len(), 2);
    assert_eq!(repo.ratings_for_goal(sleep.id).len(), 1);
    assert_eq!(repo.rating_for_date(sleep.id, day(2024, 1, 2)), None);
}

#[test]
fn removing_a_goal_cascades_all_of_its_ratings() {
    let store = SqliteStore::open_in_memory().unwrap();
    let repo = GoalRepository::new(&store);
    let focus = repo.add_goal("Focus").unwrap().unwrap();
    let sleep = repo.add_goal("Sleep").unwrap().unwrap();

    repo.set_rating(focus.id, day(2024, 1, 1), rating(4)).unwrap();
    repo.set_rating(focus.id, day(2024, 1, 2), rating(3)).unwrap();
    repo.set_rating(focus.id, day(2024, 1, 3), rating(5)).unwrap();
    repo.set_rating(sleep.id, day(2024, 1, 1), rating(2)).unwrap();

    repo.remove_goal(focus.id).unwrap();

    assert_eq!(repo.goals().len(), 1);
    assert!(repo.ratings_for_goal(focus.id).is_empty());
    assert_eq!(repo.ratings_for_goal(sleep.id).len(), 1);
}

#[test]
fn remove_unknown_goal_is_a_no_op() {
    let store = SqliteStore::open_in_memory().unwrap();
    let repo = GoalRepository::new(&store);
    repo.add_goal("Focus").unwrap().unwrap();

    repo.remove_goal(Uuid::new_v4()).unwrap();
    assert_eq!(repo.goals().len(), 1);
}

#[test]
fn long_term_progress_is_a_flat_mean_percentage() {
    let store = SqliteStore::open_in_memory().unwrap();
    let repo = GoalRepository::new(&store);
    let goal = repo.add_goal("Focus").unwrap().unwrap();

    assert_eq!(repo.long_term_progress(goal.id), 0);

    repo.set_rating(goal.id, day(2024, 1, 1), rating(5)).unwrap();
    assert_eq!(repo.long_term_progress(goal.id), 100);

    repo.set_rating(goal.id, day(2024, 1, 2), rating(1)).unwrap();
    assert_eq!(repo.long_term_progress(goal.id), 60);
}

#[test]
fn trend_series_carries_one_point_per_rated_day() {
    let store = SqliteStore::open_in_memory().unwrap();
    let repo = GoalRepository::new(&store);
    let goal = repo.add_goal("Focus").unwrap().unwrap();

    repo.set_rating(goal.id, day(2024, 1, 1), rating(4)).unwrap();
    repo.set_rating(goal.id, day(2024, 1, 2), rating(2)).unwrap();

    let window = last_n_days(day(2024, 1, 3), 3);
    let points = trend_points(&window, &repo.ratings_for_goal(goal.id));

    assert_eq!(points.len(), 2);
    assert_eq!((points[0].day_index, points[0].rating), (0, rating(4)));
    assert_eq!((points[1].day_index, points[1].rating), (1, rating(2)));
}
