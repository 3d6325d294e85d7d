use dioxus::prelude::WritableExt;
use super::SiteActions;
use super::test_harness::{setup_site, untouched};

fn start_grammar_quiz(actions: &SiteActions) {
    let mut quiz = actions.state().quiz;
    quiz.write()
        .start(actions.context().content().quizzes(), "grammar")
        .expect("grammar quiz");
}

#[tokio::test(flavor = "current_thread")]
async fn site_smoke_renders_every_section() {
    let harness = setup_site(untouched);
    let html = harness.render();

    for id in ["home", "lessons", "quizzes", "about", "navbar", "nav-menu", "hamburger"] {
        let needle = format!("id=\"{id}\"");
        assert!(html.contains(&needle), "missing {needle} in {html}");
    }
    assert!(html.contains("Present Simple and Present Continuous"), "missing lesson card");
    assert!(html.contains("Idioms Quiz"), "missing quiz card");
    assert!(html.contains("4 questions"), "missing question count");
}

#[tokio::test(flavor = "current_thread")]
async fn loader_smoke_starts_at_zero_with_first_phrase() {
    let html = setup_site(untouched).render();
    assert!(html.contains("id=\"loader\""), "missing loader in {html}");
    assert!(html.contains("Preparing lessons..."), "missing status in {html}");
    assert!(html.contains("width: 0%"), "loader bar not empty in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tabs_smoke_first_tab_is_active() {
    let html = setup_site(untouched).render();
    assert_eq!(html.matches("tab-btn active").count(), 1, "{html}");
    assert_eq!(html.matches("tab-pane active").count(), 1, "{html}");
    assert!(html.contains("data-tab=\"vocabulary\""), "{html}");

    let grammar_pane = html.find("id=\"grammar\"").expect("grammar pane");
    let active_pane = html.find("tab-pane active").expect("active pane");
    assert!(active_pane.abs_diff(grammar_pane) < 80, "grammar pane is not the active one");
}

#[tokio::test(flavor = "current_thread")]
async fn tabs_smoke_activation_moves_the_active_pane() {
    let html = setup_site(|actions| {
        let mut tabs = actions.state().tabs;
        tabs.write().activate("speaking");
    })
    .render();

    let speaking_pane = html.find("id=\"speaking\"").expect("speaking pane");
    let active_pane = html.find("tab-pane active").expect("active pane");
    assert!(active_pane.abs_diff(speaking_pane) < 80, "speaking pane is not the active one");
    assert_eq!(html.matches("tab-btn active").count(), 1, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reveal_smoke_every_card_starts_hidden_and_staggered() {
    let harness = setup_site(untouched);
    let html = harness.render();
    let expected =
        harness.content.lessons().len() + harness.content.quizzes().banks().len() + 3;

    assert_eq!(html.matches("data-reveal-index=").count(), expected, "{html}");
    assert_eq!(html.matches("opacity: 0; transform: translateY(30px)").count(), expected);
    assert!(html.contains("ease 0.1s"), "second card is not staggered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn modals_smoke_start_hidden() {
    let html = setup_site(untouched).render();
    assert!(html.contains("id=\"lesson-modal\""), "{html}");
    assert!(html.contains("id=\"quiz-modal\""), "{html}");
    assert_eq!(html.matches("display: none").count(), 2, "{html}");
    assert!(!html.contains("quiz-option"), "quiz body rendered without a quiz");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_modal_smoke_renders_markdown_body() {
    let html = setup_site(|actions| {
        let mut modal = actions.state().lesson;
        modal
            .write()
            .open(actions.context().content().lessons(), "present-tenses")
            .expect("lesson");
    })
    .render();

    assert!(html.contains("<h2>Present Simple</h2>"), "missing rendered heading in {html}");
    assert!(html.contains("<strong>habits</strong>"), "missing emphasis in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_smoke_renders_first_question() {
    let html = setup_site(start_grammar_quiz).render();

    assert!(html.contains("Grammar Quiz"), "{html}");
    assert!(html.contains("Question 1 of 5"), "{html}");
    assert!(html.contains("She ___ to work by bus every day."), "{html}");
    assert_eq!(html.matches("class=\"quiz-option\"").count(), 4, "{html}");
    for letter in ["A", "B", "C", "D"] {
        let needle = format!("<span class=\"option-letter\">{letter}</span>");
        assert!(html.contains(&needle), "missing {needle}");
    }
    assert!(html.contains("width: 20%"), "progress bar not at 20% in {html}");
    assert!(html.contains(">Next<"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_smoke_marks_selected_option() {
    let html = setup_site(|actions| {
        start_grammar_quiz(actions);
        let mut quiz = actions.state().quiz;
        quiz.write().select_answer(1).expect("answer");
    })
    .render();

    assert_eq!(html.matches("quiz-option selected").count(), 1, "{html}");
    assert_eq!(html.matches("class=\"quiz-option\"").count(), 3, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_smoke_results_list_unanswered_questions() {
    let html = setup_site(|actions| {
        start_grammar_quiz(actions);
        let mut quiz = actions.state().quiz;
        let mut quiz = quiz.write();
        quiz.select_answer(1).expect("answer");
        while quiz.next().is_ok() {}
    })
    .render();

    assert!(html.contains("1 / 5"), "{html}");
    assert!(html.contains("20%"), "{html}");
    assert!(html.contains("Keep practicing!"), "{html}");
    assert_eq!(html.matches("Your answer: Not answered").count(), 4, "{html}");
    assert!(html.contains("Try again"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_smoke_start_without_modal_keeps_quiz_idle() {
    let html = setup_site(|actions| actions.start_quiz("grammar")).render();

    assert!(!html.contains("Question 1 of 5"), "quiz started without its modal: {html}");
    assert!(!html.contains("quiz-option"), "{html}");
    assert_eq!(html.matches("display: none").count(), 2, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_modal_smoke_open_without_modal_renders_nothing() {
    let html = setup_site(|actions| actions.open_lesson_modal("present-tenses")).render();

    assert!(!html.contains("<h2>Present Simple</h2>"), "lesson opened without its modal: {html}");
    assert_eq!(html.matches("display: none").count(), 2, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn navbar_smoke_missing_section_still_closes_menu() {
    let html = setup_site(|actions| {
        let mut menu = actions.state().menu;
        menu.write().toggle();
        actions.scroll_to_section("nowhere");
    })
    .render();

    assert!(html.contains("class=\"nav-menu\""), "{html}");
    assert!(!html.contains("nav-menu active"), "menu left open: {html}");
    assert!(!html.contains("hamburger active"), "{html}");
}
