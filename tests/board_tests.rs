use athletica::core::{ConflictQuery, EventBoard, EventFilters, EventSource};
use athletica::db::DbPool;
use athletica::db::initialize::init_db;
use athletica::db::queries::{delete_event, insert_event, update_event};
use athletica::errors::{AppError, AppResult};
use athletica::models::{Event, EventType, StatusFilter, TeamScope};
use athletica::realtime::ChangeFeed;
use chrono::{DateTime, TimeZone, Utc};

fn at(day: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2099, 6, day, h, 0, 0).unwrap()
}

fn store_with_feed(feed: &ChangeFeed) -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool.with_publisher(feed.publisher())
}

struct Outage;

impl EventSource for Outage {
    fn load_events(&mut self) -> AppResult<Vec<Event>> {
        Err(AppError::Export("backend offline".into()))
    }
}

#[test]
fn every_write_queues_one_refetch() {
    let mut feed = ChangeFeed::new();
    let mut store = store_with_feed(&feed);
    let mut board = EventBoard::new(EventFilters::new());
    board.attach(&mut feed);

    let id = insert_event(&mut store, &Event::new("Match day", at(1, 15), at(1, 17), "Stadium", EventType::Match))
        .unwrap();
    let mut ev = store.load_events().unwrap().remove(0);
    ev.title = "Match day (moved)".into();
    update_event(&mut store, &ev).unwrap();
    insert_event(&mut store, &Event::new("Recovery", at(2, 9), at(2, 10), "Gym", EventType::Training)).unwrap();
    delete_event(&mut store, id).unwrap();

    assert_eq!(feed.dispatch(), 4);
    assert_eq!(board.pending_refreshes(), 4);

    assert_eq!(board.sync(&mut store).unwrap(), 4);
    assert_eq!(board.pending_refreshes(), 0);

    let titles: Vec<&str> = board.events().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Recovery"]);
}

#[test]
fn detached_board_is_not_notified() {
    let mut feed = ChangeFeed::new();
    let mut store = store_with_feed(&feed);
    let mut board = EventBoard::new(EventFilters::new());

    board.attach(&mut feed);
    board.detach(&mut feed);
    assert_eq!(feed.subscriber_count(), 0);

    insert_event(&mut store, &Event::new("Solo run", at(3, 6), at(3, 7), "Park", EventType::Training)).unwrap();
    feed.dispatch();
    assert_eq!(board.pending_refreshes(), 0);
}

#[test]
fn failed_refetch_keeps_previous_list() {
    let feed = ChangeFeed::new();
    let mut store = store_with_feed(&feed);
    insert_event(&mut store, &Event::new("Derby", at(4, 18), at(4, 20), "Stadium", EventType::Match)).unwrap();

    let mut board = EventBoard::new(EventFilters::new());
    board.refresh(&mut store).unwrap();
    assert_eq!(board.events().len(), 1);

    assert!(board.refresh(&mut Outage).is_err());
    assert_eq!(board.events().len(), 1);
}

#[test]
fn board_applies_its_filters() {
    let feed = ChangeFeed::new();
    let mut store = store_with_feed(&feed);
    insert_event(
        &mut store,
        &Event::new("Team A session", at(5, 10), at(5, 11), "Pitch", EventType::Training).with_team(Some(1)),
    )
    .unwrap();
    insert_event(&mut store, &Event::new("Open meetup", at(5, 12), at(5, 13), "Cafe", EventType::Meetup)).unwrap();

    let mut board = EventBoard::new(EventFilters::new());
    board.refresh(&mut store).unwrap();
    board.filters_mut().set_status(StatusFilter::All);
    board.filters_mut().set_team(TeamScope::NoTeam);

    let visible = board.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Open meetup");

    board.filters_mut().reset();
    assert_eq!(board.visible().len(), 2);
}

#[test]
fn conflict_checks_fail_open_during_outage() {
    let mut board = EventBoard::new(EventFilters::new());
    let query = ConflictQuery::new(Some(at(6, 10)), Some(at(6, 11)));

    let report = board.check_conflicts(&mut Outage, &query).expect("check applied");
    assert!(report.is_empty());
    assert!(!board.checker().is_checking());
}

#[test]
fn conflict_check_against_store() {
    let feed = ChangeFeed::new();
    let mut store = store_with_feed(&feed);
    let id = insert_event(&mut store, &Event::new("Final", at(7, 18), at(7, 20), "Stadium", EventType::Match)).unwrap();

    let mut board = EventBoard::new(EventFilters::new());
    let window = ConflictQuery::new(Some(at(7, 20)), Some(at(7, 22)));

    let report = board.check_conflicts(&mut store, &window).unwrap();
    assert_eq!(report.count(), 1);
    assert_eq!(report.conflicts[0].id, id);

    let editing = window.excluding(Some(id));
    assert!(board.check_conflicts(&mut store, &editing).unwrap().is_empty());
}
