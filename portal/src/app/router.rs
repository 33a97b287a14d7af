//! # Routes and Navigation Guard
//!
//! Static route table for the portal screens and the guard run before every
//! navigation. The guard is a pure function of the target route and the
//! current [`Session`] snapshot: it reads no global state, performs no I/O
//! and never fails: authorization denial is a redirect decision, not an
//! error.

use std::sync::Arc;

use shared::Role;

use super::session::{Session, SessionStore};

/// Navigable screens of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Home/dashboard screen
    Home,
    /// Login form
    Login,
    /// Account registration form
    Register,
    /// Administration screens (users, activities, registrations)
    Admin,
    /// Volunteer activity browser
    Volunteer,
    /// Volunteer profile screen
    Profile,
}

impl Screen {
    /// All screens in route-table order.
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Home,
            Screen::Login,
            Screen::Register,
            Screen::Admin,
            Screen::Volunteer,
            Screen::Profile,
        ]
    }

    /// Screen title for header display.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Login => "Login",
            Screen::Register => "Register",
            Screen::Admin => "Administration",
            Screen::Volunteer => "Activities",
            Screen::Profile => "My Profile",
        }
    }
}

/// Static access metadata attached to a navigable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub screen: Screen,
    pub requires_auth: bool,
    /// Strict role requirement; no hierarchy between roles.
    pub required_role: Option<Role>,
}

/// Where role mismatches and authenticated bounces land.
pub const DEFAULT_ROUTE: &str = "/";
/// Where unauthenticated navigations land.
pub const LOGIN_ROUTE: &str = "/login";

/// The route table. Defined once, never mutated at runtime.
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: "/",
        screen: Screen::Home,
        requires_auth: true,
        required_role: None,
    },
    RouteDescriptor {
        path: "/login",
        screen: Screen::Login,
        requires_auth: false,
        required_role: None,
    },
    RouteDescriptor {
        path: "/register",
        screen: Screen::Register,
        requires_auth: false,
        required_role: None,
    },
    RouteDescriptor {
        path: "/admin",
        screen: Screen::Admin,
        requires_auth: true,
        required_role: Some(Role::Admin),
    },
    RouteDescriptor {
        path: "/volunteer",
        screen: Screen::Volunteer,
        requires_auth: true,
        required_role: Some(Role::Volunteer),
    },
    RouteDescriptor {
        path: "/profile",
        screen: Screen::Profile,
        requires_auth: true,
        required_role: Some(Role::Volunteer),
    },
];

/// Look up a route by its exact path (query string excluded).
pub fn find_route(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| route.path == path)
}

/// Decision produced by the guard for one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Proceed to the target screen.
    Allow,
    /// Target requires auth and no token is present. `redirect` is the
    /// originally intended path, carried so login can forward afterwards.
    RedirectToLogin { redirect: String },
    /// Session exists but lacks permission, or an authenticated user hit
    /// the login/register screen.
    RedirectToDefault,
}

impl NavigationOutcome {
    /// Rendered location for redirects, `None` when navigation proceeds.
    /// The intended path travels percent-encoded in the `redirect` query
    /// parameter.
    pub fn location(&self) -> Option<String> {
        match self {
            NavigationOutcome::Allow => None,
            NavigationOutcome::RedirectToLogin { redirect } => Some(format!(
                "{}?redirect={}",
                LOGIN_ROUTE,
                urlencoding::encode(redirect)
            )),
            NavigationOutcome::RedirectToDefault => Some(DEFAULT_ROUTE.to_string()),
        }
    }
}

/// Run the guard for a navigation to `target`.
///
/// `full_path` is the path as requested, query string included, so the login
/// redirect can restore it verbatim. Checks run in a fixed order: auth
/// requirement, then token presence, then role match; public routes only get
/// the already-authenticated bounce off login/register.
pub fn evaluate(target: &RouteDescriptor, full_path: &str, session: &Session) -> NavigationOutcome {
    if target.requires_auth {
        if session.token.is_none() {
            return NavigationOutcome::RedirectToLogin {
                redirect: full_path.to_string(),
            };
        }

        if let Some(required) = target.required_role {
            if session.role != Some(required) {
                return NavigationOutcome::RedirectToDefault;
            }
        }

        return NavigationOutcome::Allow;
    }

    if session.is_authenticated() && matches!(target.screen, Screen::Login | Screen::Register) {
        return NavigationOutcome::RedirectToDefault;
    }

    NavigationOutcome::Allow
}

/// Route table bound to a session store.
///
/// Re-reads the session on every navigation attempt, mirroring how the API
/// client re-reads it on every request.
pub struct Router {
    session: Arc<SessionStore>,
}

impl Router {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    /// Evaluate a navigation to `path`. Returns `None` for unknown paths;
    /// the caller decides how to surface those.
    pub fn navigate(&self, path: &str) -> Option<NavigationOutcome> {
        let route_path = path.split('?').next().unwrap_or(path);
        let route = find_route(route_path)?;
        let outcome = evaluate(route, path, &self.session.snapshot());
        tracing::debug!(path, outcome = ?outcome, "navigation evaluated");
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anonymous() -> Session {
        Session::default()
    }

    fn volunteer() -> Session {
        Session::authenticated("t", Role::Volunteer)
    }

    fn admin() -> Session {
        Session::authenticated("t", Role::Admin)
    }

    #[test]
    fn test_protected_routes_redirect_to_login_without_token() {
        for route in ROUTES.iter().filter(|r| r.requires_auth) {
            let outcome = evaluate(route, route.path, &anonymous());
            assert_eq!(
                outcome,
                NavigationOutcome::RedirectToLogin {
                    redirect: route.path.to_string()
                },
                "route {}",
                route.path
            );
        }
    }

    #[test]
    fn test_login_redirect_preserves_intended_path() {
        let route = find_route("/admin").unwrap();
        let outcome = evaluate(route, "/admin", &anonymous());

        assert_eq!(
            outcome,
            NavigationOutcome::RedirectToLogin {
                redirect: "/admin".to_string()
            }
        );
        assert_eq!(
            outcome.location().unwrap(),
            "/login?redirect=%2Fadmin"
        );
    }

    #[test]
    fn test_login_redirect_preserves_query_string() {
        let route = find_route("/volunteer").unwrap();
        let outcome = evaluate(route, "/volunteer?activity=5", &anonymous());

        assert_eq!(
            outcome,
            NavigationOutcome::RedirectToLogin {
                redirect: "/volunteer?activity=5".to_string()
            }
        );
    }

    #[test]
    fn test_role_mismatch_redirects_to_default_not_login() {
        let route = find_route("/admin").unwrap();
        assert_eq!(
            evaluate(route, "/admin", &volunteer()),
            NavigationOutcome::RedirectToDefault
        );

        // No hierarchy: admin does not satisfy a volunteer-only route.
        let route = find_route("/volunteer").unwrap();
        assert_eq!(
            evaluate(route, "/volunteer", &admin()),
            NavigationOutcome::RedirectToDefault
        );
        let route = find_route("/profile").unwrap();
        assert_eq!(
            evaluate(route, "/profile", &admin()),
            NavigationOutcome::RedirectToDefault
        );
    }

    #[test]
    fn test_matching_or_absent_role_allows() {
        let route = find_route("/admin").unwrap();
        assert_eq!(evaluate(route, "/admin", &admin()), NavigationOutcome::Allow);

        let route = find_route("/volunteer").unwrap();
        assert_eq!(
            evaluate(route, "/volunteer", &volunteer()),
            NavigationOutcome::Allow
        );

        // Home requires auth but no specific role.
        let route = find_route("/").unwrap();
        assert_eq!(evaluate(route, "/", &admin()), NavigationOutcome::Allow);
        assert_eq!(evaluate(route, "/", &volunteer()), NavigationOutcome::Allow);
    }

    #[test]
    fn test_authenticated_users_bounce_off_login_and_register() {
        for path in ["/login", "/register"] {
            let route = find_route(path).unwrap();
            assert_eq!(
                evaluate(route, path, &volunteer()),
                NavigationOutcome::RedirectToDefault,
                "route {path}"
            );
            assert_eq!(
                evaluate(route, path, &anonymous()),
                NavigationOutcome::Allow,
                "route {path}"
            );
        }
    }

    #[test]
    fn test_token_without_role_fails_role_gated_routes() {
        // A session with a token but no role label can reach Home but not
        // any role-gated screen.
        let session = Session {
            token: Some("t".to_string()),
            role: None,
        };

        let home = find_route("/").unwrap();
        assert_eq!(evaluate(home, "/", &session), NavigationOutcome::Allow);

        let admin_route = find_route("/admin").unwrap();
        assert_eq!(
            evaluate(admin_route, "/admin", &session),
            NavigationOutcome::RedirectToDefault
        );
    }

    #[test]
    fn test_redirect_locations() {
        assert_eq!(NavigationOutcome::Allow.location(), None);
        assert_eq!(
            NavigationOutcome::RedirectToDefault.location().unwrap(),
            "/"
        );
    }

    #[test]
    fn test_router_navigate_strips_query_for_lookup() {
        let session = Arc::new(SessionStore::in_memory());
        let router = Router::new(session.clone());

        assert_eq!(
            router.navigate("/admin?tab=users"),
            Some(NavigationOutcome::RedirectToLogin {
                redirect: "/admin?tab=users".to_string()
            })
        );
        assert_eq!(router.navigate("/nowhere"), None);

        session.store("t".to_string(), Role::Admin);
        assert_eq!(
            router.navigate("/admin?tab=users"),
            Some(NavigationOutcome::Allow)
        );
    }

    #[test]
    fn test_route_table_covers_all_screens() {
        for screen in Screen::all() {
            assert!(
                ROUTES.iter().any(|r| r.screen == *screen),
                "screen {:?} has no route",
                screen
            );
        }
    }
}
