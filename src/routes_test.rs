use super::*;

#[test]
fn parse_matches_every_declared_path() {
    for route in AppRoute::ALL {
        if route != AppRoute::NotFound {
            assert_eq!(AppRoute::parse(route.path()), route, "{route:?}");
        }
    }
}

#[test]
fn parse_ignores_query_fragment_and_trailing_slash() {
    assert_eq!(AppRoute::parse("/login?from=/dashboard"), AppRoute::Login);
    assert_eq!(AppRoute::parse("/home#top"), AppRoute::Home);
    assert_eq!(AppRoute::parse("/profile/"), AppRoute::Profile);
    assert_eq!(AppRoute::parse(""), AppRoute::Landing);
}

#[test]
fn parse_unknown_is_not_found() {
    assert_eq!(AppRoute::parse("/tasks"), AppRoute::NotFound);
    assert_eq!(AppRoute::parse("/dashboard/extra"), AppRoute::NotFound);
    assert_eq!(AppRoute::parse("*"), AppRoute::NotFound);
}

#[test]
fn protected_routes_declare_roles() {
    assert_eq!(AppRoute::Home.required_roles(), Some(Role::ALL));
    assert_eq!(AppRoute::Profile.required_roles(), Some(Role::ALL));
    assert_eq!(AppRoute::Dashboard.required_roles(), Some(&[Role::Admin][..]));
}

#[test]
fn public_routes_declare_no_roles() {
    for route in [AppRoute::Landing, AppRoute::Register, AppRoute::Login, AppRoute::Unauthorized, AppRoute::NotFound] {
        assert_eq!(route.required_roles(), None, "{route:?}");
    }
}

#[test]
fn landing_depends_on_role() {
    assert_eq!(AppRoute::landing_for(Role::Admin), AppRoute::Dashboard);
    assert_eq!(AppRoute::landing_for(Role::User), AppRoute::Home);
}

#[test]
fn redirect_href_carries_from_query() {
    assert_eq!(Redirect::with_from(AppRoute::Login, AppRoute::Dashboard).href(), "/login?from=/dashboard");
    assert_eq!(Redirect::to(AppRoute::Unauthorized).href(), "/unauthorized");
}
