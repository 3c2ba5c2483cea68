use emulair::navigation::{Destination, NavController, TopNavDestination};
use emulair::viewmodels::NavigationViewModel;

fn routes(nav: &NavController) -> Vec<String> {
    nav.entries().iter().map(|e| e.route()).collect()
}

#[test]
fn drill_down_and_back() {
    let mut nav = NavController::new(NavigationViewModel::default().start_destination());
    assert!(nav.navigate_route("systems"));
    assert!(nav.navigate_route("system_games/2"));
    assert!(nav.navigate_route("game_options/14"));
    assert_eq!(
        routes(&nav),
        vec!["games", "systems", "system_games/2", "game_options/14"]
    );
    assert_eq!(nav.current().arg(), Some("14"));
    assert!(!nav.should_show_top_bar());

    assert!(nav.pop_back());
    assert!(nav.pop_back());
    assert_eq!(nav.current_tab(), Some(TopNavDestination::Systems));
    assert!(nav.pop_back());
    assert!(!nav.pop_back());
    assert_eq!(routes(&nav), vec!["games"]);
}

#[test]
fn unknown_routes_leave_the_stack_alone() {
    let mut nav = NavController::new(Destination::Main);
    assert!(!nav.navigate_route("arcade/1"));
    assert!(!nav.navigate_route(""));
    assert_eq!(nav.depth(), 1);
}

#[test]
fn tab_switch_pops_back_to_earlier_visit() {
    let mut nav = NavController::new(Destination::Main);
    nav.navigate_tab(TopNavDestination::Systems);
    nav.navigate(Destination::SystemGames, &["1"]);
    nav.navigate_tab(TopNavDestination::Search);
    nav.navigate(Destination::Settings, &[] as &[&str]);
    assert_eq!(nav.depth(), 5);

    nav.navigate_tab(TopNavDestination::Systems);
    assert_eq!(routes(&nav), vec!["games", "systems"]);

    nav.navigate_tab(TopNavDestination::Games);
    assert_eq!(routes(&nav), vec!["games"]);
}

#[test]
fn onboarding_graph_resets_into_main() {
    let mut nav = NavController::new(NavigationViewModel::new(false).start_destination());
    assert_eq!(nav.current_destination(), Destination::Welcome);
    nav.navigate(Destination::PickGamesFolder, &[] as &[&str]);
    nav.navigate(Destination::CreateSystemFolder, &[] as &[&str]);
    nav.reset_to(Destination::Main);
    assert_eq!(routes(&nav), vec!["games"]);
    assert_eq!(nav.current_tab(), Some(TopNavDestination::Games));
}
