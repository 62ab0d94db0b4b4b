use std::fmt;
use std::str::FromStr;

/// Navigable screens and the paths they live at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    SignIn,
    SignUp,
    Feed,
    MyBlogs,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Landing,
        Route::SignIn,
        Route::SignUp,
        Route::Feed,
        Route::MyBlogs,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::SignIn => "/form",
            Route::SignUp => "/signup",
            Route::Feed => "/blogs",
            Route::MyBlogs => "/myblogs",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No route for path '{0}'")]
pub struct RouteError(pub String);

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim();
        let normalized = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => trimmed,
        };
        Route::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .ok_or_else(|| RouteError(path.to_string()))
    }
}
