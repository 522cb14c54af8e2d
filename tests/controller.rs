//! Controller behavior against a scripted Photo Service, on paused time.

mod common;

use common::{detail, ids, summary, Call, ScriptedService};
use photogrid::app::AppState;
use photogrid::ui::render;
use photogrid::{FeedController, SelectionState, Theme};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{advance, timeout, Instant};

const QUIET: Duration = Duration::from_millis(300);

fn controller(service: &Arc<ScriptedService>) -> FeedController {
    FeedController::new(service.clone(), AppState::new(Theme::default()), QUIET)
}

/// Applies events until the controller has been idle for a while.
async fn settle(controller: &mut FeedController) {
    while timeout(Duration::from_secs(10), controller.process_next()).await.is_ok() {}
}

fn feed() -> Vec<photogrid::ImageSummary> {
    vec![summary("A", "ann"), summary("B", "bob"), summary("C", "cat")]
}

#[tokio::test(start_paused = true)]
async fn mount_loads_the_feed() {
    let service = Arc::new(ScriptedService::new().with_feed(feed()));
    let mut controller = controller(&service);

    assert!(controller.mount());
    assert!(controller.process_next().await);

    assert_eq!(ids(&controller.state().images), vec!["A", "B", "C"]);
    assert!(!controller.state().is_loading());
    assert_eq!(service.calls(), vec![Call::List]);
}

#[tokio::test(start_paused = true)]
async fn query_before_mount_is_not_searched() {
    let service = Arc::new(ScriptedService::new().with_feed(feed()));
    let mut controller = controller(&service);

    controller.set_query("early");
    advance(Duration::from_secs(1)).await;
    assert!(!controller.process_ready());
    assert!(service.calls().is_empty());

    controller.mount();
    settle(&mut controller).await;
    assert_eq!(service.calls(), vec![Call::List]);
}

#[tokio::test(start_paused = true)]
async fn typing_burst_searches_once_for_last_text() {
    let service = Arc::new(
        ScriptedService::new()
            .with_feed(feed())
            .with_results("cat", vec![summary("K", "kit")]),
    );
    let mut controller = controller(&service);
    controller.mount();
    settle(&mut controller).await;

    controller.set_query("c");
    advance(Duration::from_millis(100)).await;
    controller.set_query("ca");
    advance(Duration::from_millis(100)).await;
    controller.set_query("cat");
    let typed_at = Instant::now();
    assert!(!controller.process_ready());
    assert!(service.search_calls().is_empty());

    // Timer expiry starts the search.
    assert!(controller.process_next().await);
    assert!(typed_at.elapsed() >= QUIET);
    assert!(controller.state().is_loading());

    settle(&mut controller).await;
    assert_eq!(service.search_calls(), vec!["cat".to_string()]);
    assert_eq!(ids(&controller.state().images), vec!["K"]);
    assert!(!controller.state().is_loading());
}

#[tokio::test(start_paused = true)]
async fn pause_longer_than_quiet_period_searches_each_text() {
    let service = Arc::new(ScriptedService::new().with_feed(feed()));
    let mut controller = controller(&service);
    controller.mount();
    settle(&mut controller).await;

    controller.set_query("sea");
    settle(&mut controller).await;
    controller.set_query("seal");
    settle(&mut controller).await;

    assert_eq!(service.search_calls(), vec!["sea".to_string(), "seal".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn emptying_query_reloads_feed_immediately() {
    let service = Arc::new(
        ScriptedService::new()
            .with_feed(feed())
            .with_results("dog", vec![summary("D", "dan")]),
    );
    let mut controller = controller(&service);
    controller.mount();
    settle(&mut controller).await;

    controller.set_query("dog");
    assert!(controller.set_query(""));
    assert!(controller.process_next().await);

    assert_eq!(ids(&controller.state().images), vec!["A", "B", "C"]);
    settle(&mut controller).await;
    assert_eq!(service.calls(), vec![Call::List, Call::List]);
}

#[tokio::test(start_paused = true)]
async fn empty_results_render_empty_state() {
    let service = Arc::new(ScriptedService::new().with_feed(feed()).with_results("zzz", vec![]));
    let mut controller = controller(&service);
    controller.mount();
    settle(&mut controller).await;

    controller.set_query("zzz");
    settle(&mut controller).await;

    assert!(controller.state().images.is_empty());
    let frame = render(controller.state(), 24, 80);
    assert!(frame.contains("No results found"));
    assert!(frame.contains("Nothing matches \"zzz\""));
}

#[tokio::test(start_paused = true)]
async fn clear_is_ignored_while_searching() {
    let service = Arc::new(
        ScriptedService::new()
            .with_feed(feed())
            .with_results("cat", vec![summary("K", "kit")])
            .with_delay("cat", Duration::from_secs(1)),
    );
    let mut controller = controller(&service);
    controller.mount();
    settle(&mut controller).await;

    controller.set_query("cat");
    controller.process_next().await;
    assert!(controller.state().is_loading());

    assert!(!controller.clear_query());
    assert_eq!(controller.state().query, "cat");

    assert!(controller.process_next().await);
    assert!(!controller.state().is_loading());

    assert!(controller.clear_query());
    assert_eq!(controller.state().query, "");
    settle(&mut controller).await;
    assert_eq!(ids(&controller.state().images), vec!["A", "B", "C"]);
}

#[tokio::test(start_paused = true)]
async fn failed_search_releases_loading_and_keeps_images() {
    let service = Arc::new(
        ScriptedService::new()
            .with_feed(feed())
            .with_failing_search("boom"),
    );
    let mut controller = controller(&service);
    controller.mount();
    settle(&mut controller).await;

    controller.set_query("boom");
    settle(&mut controller).await;

    assert!(!controller.state().is_loading());
    assert_eq!(ids(&controller.state().images), vec!["A", "B", "C"]);
}

#[tokio::test(start_paused = true)]
async fn slower_earlier_search_overwrites_later_results() {
    let service = Arc::new(
        ScriptedService::new()
            .with_feed(feed())
            .with_results("cat", vec![summary("K", "kit")])
            .with_results("dog", vec![summary("D", "dan")])
            .with_delay("cat", Duration::from_secs(1))
            .with_delay("dog", Duration::from_millis(100)),
    );
    let mut controller = controller(&service);
    controller.mount();
    settle(&mut controller).await;

    controller.set_query("cat");
    controller.process_next().await;
    controller.set_query("dog");
    controller.process_next().await;
    assert_eq!(controller.state().searches_in_flight(), 2);

    // "dog" answers first; one search is still outstanding.
    controller.process_next().await;
    assert_eq!(ids(&controller.state().images), vec!["D"]);
    assert!(controller.state().is_loading());

    controller.process_next().await;
    assert_eq!(ids(&controller.state().images), vec!["K"]);
    assert_eq!(controller.state().query, "dog");
    assert!(!controller.state().is_loading());
}

#[tokio::test(start_paused = true)]
async fn selecting_fetches_and_shows_detail() {
    let service = Arc::new(ScriptedService::new().with_feed(feed()).with_detail(detail("B")));
    let mut controller = controller(&service);
    controller.mount();
    settle(&mut controller).await;

    let id = controller.image_id_at(2).map(str::to_owned);
    assert_eq!(id.as_deref(), Some("B"));

    assert!(controller.select_image("B"));
    assert_eq!(
        controller.state().selection,
        SelectionState::OpenPending { id: "B".to_string() }
    );

    assert!(controller.process_next().await);
    assert_eq!(controller.state().selection.detail().map(|d| d.id.as_str()), Some("B"));
    assert!(render(controller.state(), 40, 100).contains("detail for B"));

    assert!(controller.close_dialog());
    assert_eq!(controller.state().selection, SelectionState::Closed);
    assert!(!controller.close_dialog());
}

#[tokio::test(start_paused = true)]
async fn failed_detail_stays_pending() {
    let service = Arc::new(ScriptedService::new().with_feed(feed()));
    let mut controller = controller(&service);
    controller.mount();
    settle(&mut controller).await;

    controller.select_image("42");
    assert!(!controller.process_next().await);

    assert_eq!(
        controller.state().selection,
        SelectionState::OpenPending { id: "42".to_string() }
    );
    assert!(render(controller.state(), 30, 100).contains("Loading photo 42"));
    assert_eq!(service.calls().last(), Some(&Call::Detail("42".to_string())));
}

#[tokio::test(start_paused = true)]
async fn detail_arriving_after_close_is_dropped() {
    let service = Arc::new(
        ScriptedService::new()
            .with_feed(feed())
            .with_detail(detail("A"))
            .with_delay("A", Duration::from_millis(500)),
    );
    let mut controller = controller(&service);
    controller.mount();
    settle(&mut controller).await;

    controller.select_image("A");
    controller.close_dialog();
    assert!(!controller.process_next().await);
    assert_eq!(controller.state().selection, SelectionState::Closed);
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_scheduled_search() {
    let service = Arc::new(ScriptedService::new().with_feed(feed()));
    let mut controller = controller(&service);
    controller.mount();
    settle(&mut controller).await;

    controller.set_query("cat");
    controller.shutdown();
    advance(Duration::from_secs(1)).await;

    assert!(!controller.process_ready());
    assert!(service.search_calls().is_empty());
}
