use quizkit::config::Config;
use quizkit::model::{Question, QuizDefinition};
use quizkit::session::Session;
use quizkit::timer::{HostDriven, TimerEvent, TimerTick};

fn quiz(time_limit: u32) -> QuizDefinition {
    QuizDefinition {
        title: Some("Timed".to_string()),
        time_limit_seconds: time_limit,
        passing_score: 1,
        questions: vec![Question {
            prompt: "Q".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct_option_index: 0,
            content: None,
        }],
    }
}

fn timed_session() -> Session {
    Session::new(
        Config {
            timer_enabled: true,
            feedback_on_each_question: false,
        },
        Box::new(HostDriven),
    )
}

fn tick(s: &mut Session) -> TimerEvent {
    let epoch = s.epoch();
    s.tick(TimerTick { epoch })
}

#[test]
fn test_countdown_expires_exactly_once() {
    let mut s = timed_session();
    s.start_quiz(quiz(3)).unwrap();
    assert!(s.timer_running());

    assert_eq!(tick(&mut s), TimerEvent::Tick(2));
    assert_eq!(tick(&mut s), TimerEvent::Tick(1));
    assert_eq!(tick(&mut s), TimerEvent::TimeExpired);
    assert_eq!(s.time_remaining(), 0);
    assert!(!s.timer_running());
    assert!(s.time_expired());

    assert_eq!(tick(&mut s), TimerEvent::Ignored);
    assert_eq!(tick(&mut s), TimerEvent::Ignored);
    assert_eq!(s.time_remaining(), 0);
}

#[test]
fn test_timer_disabled_by_default() {
    let mut s = Session::new(Config::default(), Box::new(HostDriven));
    s.start_quiz(quiz(3)).unwrap();
    assert!(!s.timer_running());
    assert_eq!(tick(&mut s), TimerEvent::Ignored);
    assert_eq!(s.time_remaining(), 3);
}

#[test]
fn test_stop_timer_twice_is_safe() {
    let mut s = timed_session();
    s.start_quiz(quiz(10)).unwrap();
    s.stop_timer();
    s.stop_timer();
    assert!(!s.timer_running());
    assert_eq!(tick(&mut s), TimerEvent::Ignored);
    assert_eq!(s.time_remaining(), 10);
}

#[test]
fn test_stale_ticks_from_previous_session_ignored() {
    let mut s = timed_session();
    s.start_quiz(quiz(10)).unwrap();
    let old_epoch = s.epoch();

    s.start_quiz(quiz(5)).unwrap();
    assert!(s.timer_running());
    assert_eq!(s.tick(TimerTick { epoch: old_epoch }), TimerEvent::Ignored);
    assert_eq!(s.time_remaining(), 5);

    assert_eq!(tick(&mut s), TimerEvent::Tick(4));
}

#[test]
fn test_restart_clears_expiry() {
    let mut s = timed_session();
    s.start_quiz(quiz(1)).unwrap();
    assert_eq!(tick(&mut s), TimerEvent::TimeExpired);
    assert!(s.time_expired());

    s.start_quiz(quiz(2)).unwrap();
    assert!(!s.time_expired());
    assert!(s.timer_running());
    assert_eq!(s.time_remaining(), 2);
}

#[test]
fn test_zero_time_limit_expires_on_first_tick() {
    let mut s = timed_session();
    s.start_quiz(quiz(0)).unwrap();
    assert_eq!(tick(&mut s), TimerEvent::TimeExpired);
    assert_eq!(tick(&mut s), TimerEvent::Ignored);
}
