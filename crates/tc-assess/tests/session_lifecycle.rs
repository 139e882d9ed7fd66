use tc_assess::{
    Answer, Mode, Phase, SessionConfig, SessionController, SessionEvent, SessionState,
    SubmitReason, Tier, TransitionContext, builtin_bank, transition,
};

#[test]
fn countdown_reaches_submitted_without_explicit_submit() {
    let bank = builtin_bank();
    let ctx = TransitionContext {
        items: &bank.items,
        time_budget_s: 1800,
    };

    let mut state = transition(
        &SessionState::new(Mode::Exam),
        SessionEvent::Start { mode: Mode::Exam },
        &ctx,
    )
    .unwrap();

    let mut ticks = 0;
    while state.phase == Phase::InProgress {
        state = transition(&state, SessionEvent::Tick, &ctx).unwrap();
        ticks += 1;
    }

    assert_eq!(ticks, 1800);
    assert_eq!(state.phase, Phase::Submitted);
    assert_eq!(state.submit_reason, Some(SubmitReason::TimeExpired));

    let again = transition(&state, SessionEvent::Submit, &ctx).unwrap();
    assert_eq!(again, state);
}

#[test]
fn answers_before_submission_are_graded() {
    let mut session = SessionController::new(builtin_bank(), SessionConfig::default()).unwrap();
    session.start(Mode::Practice).unwrap();

    session.answer(1, Answer::Index(0)).unwrap();
    session.answer(2, Answer::Index(1)).unwrap();
    session.answer(3, Answer::Index(3)).unwrap();
    session.answer(11, Answer::Bool(true)).unwrap();
    session.answer(16, Answer::Text("667".into())).unwrap();
    session.toggle_flag(12).unwrap();
    session.advance(120).unwrap();
    session.submit().unwrap();

    // The late answer is refused and does not count.
    assert!(session.answer(12, Answer::Bool(false)).is_err());

    let report = session.report().unwrap();
    // 5 of 7 = 71.43
    assert_eq!(report.correct, 5);
    assert_eq!(report.score, 71);
    assert_eq!(report.tier, Tier::Practitioner);
    assert_eq!(session.state().elapsed_s, 120);
    assert!(session.state().flagged.contains(&12));
}

#[test]
fn report_serializes_to_json() {
    let mut session = SessionController::new(builtin_bank(), SessionConfig::default()).unwrap();
    session.start(Mode::Exam).unwrap();
    session.answer(21, Answer::Text("D (Selisih Awal-Akhir)".into())).unwrap();
    session.submit().unwrap();

    let report = session.report().unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["tier"], "participant");
    assert_eq!(json["topics"]["reaction_type"]["correct"], 1);
    assert_eq!(json["topics"]["reaction_type"]["total"], 2);
}
