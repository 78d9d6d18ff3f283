use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_route};

use crate::context::ProfileState;
use crate::views::{
    AdminView, CourseView, CoursesView, DownloadsView, ForumView, HomeView, LessonView,
    ProfileSwitcher,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/courses", CoursesView)] Courses {},
        #[route("/courses/:course_id", CourseView)] Course { course_id: u64 },
        #[route("/courses/:course_id/lessons/:lesson_id", LessonView)] Lesson { course_id: u64, lesson_id: u64 },
        #[route("/forum", ForumView)] Forum {},
        #[route("/admin", AdminView)] Admin {},
        #[route("/downloads", DownloadsView)] Downloads {},
}

#[component]
fn Layout() -> Element {
    let route = use_route::<Route>();
    let profile = use_context::<ProfileState>();
    // The persona switch only makes sense on the landing page, and only once a persona exists.
    let show_switcher = matches!(route, Route::Home {}) && !profile.current().is_unset();

    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                if show_switcher {
                    ProfileSwitcher {}
                }
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Campus" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Courses {}, "Courses" } }
                li { Link { to: Route::Forum {}, "Forum" } }
                li { Link { to: Route::Downloads {}, "Downloads" } }
                li { Link { to: Route::Admin {}, "Admin" } }
            }
        }
    }
}
