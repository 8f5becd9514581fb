use quizkit::router::{History, Location, Navigation, Router, TimerControl};

#[derive(Default)]
struct Ctx {
    visited: Vec<String>,
    timer_stops: usize,
}

impl TimerControl for Ctx {
    fn stop_timer(&mut self) {
        self.timer_stops += 1;
    }
}

fn router() -> Router<Ctx> {
    let mut router = Router::new();
    router.add_route("/", |ctx: &mut Ctx, _: &Location| ctx.visited.push("home".into()));
    router.add_route("/quiz", |ctx: &mut Ctx, loc: &Location| {
        let id = loc.query_param("id").unwrap_or("?");
        ctx.visited.push(format!("quiz:{}", id));
    });
    router.add_route("/results", |ctx: &mut Ctx, _: &Location| {
        ctx.visited.push("results".into())
    });
    router
}

#[test]
fn test_dispatch_exact_path() {
    let mut r = router();
    let mut ctx = Ctx::default();
    assert!(r.dispatch(&mut ctx, &Location::parse("/results")));
    assert_eq!(ctx.visited, vec!["results"]);
}

#[test]
fn test_leaving_quiz_path_stops_timer() {
    let mut r = router();
    let mut ctx = Ctx::default();

    r.navigate_to(&mut ctx, "/quiz?id=ww2");
    assert_eq!(ctx.timer_stops, 0);

    r.navigate_to(&mut ctx, "/results");
    assert_eq!(ctx.timer_stops, 1);

    r.navigate_to(&mut ctx, "/");
    assert_eq!(ctx.timer_stops, 2);
    assert_eq!(ctx.visited, vec!["quiz:ww2", "results", "home"]);
}

#[test]
fn test_unknown_path_uses_404() {
    let mut r = router();
    r.add_route("/404", |ctx: &mut Ctx, loc: &Location| {
        ctx.visited.push(format!("404:{}", loc.path))
    });
    let mut ctx = Ctx::default();

    assert!(r.navigate_to(&mut ctx, "/nowhere"));
    assert_eq!(ctx.visited, vec!["404:/nowhere"]);
    assert_eq!(ctx.timer_stops, 1);
}

#[test]
fn test_unresolved_path_is_silent_noop() {
    let mut r = router();
    let mut ctx = Ctx::default();

    assert!(!r.navigate_to(&mut ctx, "/nowhere"));
    assert!(ctx.visited.is_empty());
    assert_eq!(ctx.timer_stops, 0);
}

#[test]
fn test_reregistering_overwrites() {
    let mut r = router();
    r.add_route("/", |ctx: &mut Ctx, _: &Location| ctx.visited.push("new home".into()));
    let mut ctx = Ctx::default();
    r.navigate_to(&mut ctx, "/");
    assert_eq!(ctx.visited, vec!["new home"]);
}

#[test]
fn test_back_and_forward_redispatch() {
    let mut r = router();
    let mut ctx = Ctx::default();

    r.navigate_to(&mut ctx, "/");
    r.navigate_to(&mut ctx, "/quiz?id=code");
    r.navigate_to(&mut ctx, "/results");

    assert!(r.back(&mut ctx));
    assert!(r.back(&mut ctx));
    assert!(!r.back(&mut ctx));
    assert!(r.forward(&mut ctx));

    assert_eq!(
        ctx.visited,
        vec!["home", "quiz:code", "results", "quiz:code", "home", "quiz:code"]
    );
    assert_eq!(r.current().map(|l| l.to_string()), Some("/quiz?id=code".to_string()));
}

#[test]
fn test_navigation_after_back_drops_forward_entries() {
    let mut history = History::default();
    history.push(Location::parse("/"));
    history.push(Location::parse("/quiz?id=a"));
    history.back();
    history.push(Location::parse("/results"));

    assert_eq!(history.len(), 2);
    assert!(history.forward().is_none());
    assert_eq!(history.back().map(|l| l.path.as_str()), Some("/"));
}

#[test]
fn test_location_parsing() {
    let loc = Location::parse("/quiz?id=moon-landing&mode=fast&flag");
    assert_eq!(loc.path, "/quiz");
    assert_eq!(loc.query_param("id"), Some("moon-landing"));
    assert_eq!(loc.query_param("mode"), Some("fast"));
    assert_eq!(loc.query_param("flag"), Some(""));
    assert_eq!(loc.query_param("missing"), None);

    assert_eq!(Location::parse("").path, "/");
    assert_eq!(Location::parse("?id=x").path, "/");
}

#[test]
fn test_navigation_targets() {
    assert_eq!(Navigation::Home.target(), "/");
    assert_eq!(Navigation::Results.target(), "/results");
    assert_eq!(
        Navigation::Quiz { id: "ww2".into() }.target(),
        "/quiz?id=ww2"
    );
}

#[test]
fn test_query_values_are_decoded() {
    let loc = Location::parse("/quiz?id=moon%2Dlanding&name=Ada+Lovelace&q=a%3Db%26c");
    assert_eq!(loc.query_param("id"), Some("moon-landing"));
    assert_eq!(loc.query_param("name"), Some("Ada Lovelace"));
    assert_eq!(loc.query_param("q"), Some("a=b&c"));

    let loc = Location::parse("/quiz?expr=x=y");
    assert_eq!(loc.query_param("expr"), Some("x=y"));
}

#[test]
fn test_location_prints_back_as_parsed() {
    for target in ["/quiz?id=ww2&flag", "/quiz?flag&id=ww2", "/results", "/quiz?empty="] {
        assert_eq!(Location::parse(target).to_string(), target);
    }

    let decoded = Location::parse("/quiz?name=Ada+Lovelace&q=a%3Db");
    assert_eq!(decoded.to_string(), "/quiz?name=Ada+Lovelace&q=a%3Db");
    assert_eq!(Location::parse(&decoded.to_string()), decoded);
}
