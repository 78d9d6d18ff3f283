use campus_core::model::{DEFAULT_PAGE_SIZE, ListQuery, SerialKeyStatus};
use dioxus::prelude::*;
use services::AdminOverview;

use crate::context::AppContext;
use crate::views::components::{ErrorState, Pager, SearchBox};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    AccessLogRowVm, PagerVm, SerialKeyRowVm, map_access_log_rows, map_serial_key_rows,
    parse_status_filter, status_filter_value,
};

#[derive(Clone, Debug, PartialEq)]
struct SerialKeysData {
    rows: Vec<SerialKeyRowVm>,
    pager: PagerVm,
}

#[derive(Clone, Debug, PartialEq)]
struct AccessLogsData {
    rows: Vec<AccessLogRowVm>,
    pager: PagerVm,
}

#[component]
pub fn AdminView() -> Element {
    rsx! {
        div { class: "page admin-page",
            h2 { "Admin" }
            OverviewPanel {}
            SerialKeysPanel {}
            AccessLogsPanel {}
        }
    }
}

#[component]
fn OverviewPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        async move {
            catalog
                .admin_overview()
                .await
                .map_err(|err| ViewError::from_service(&err))
        }
    });
    let state = view_state_from_resource::<AdminOverview>(resource);

    rsx! {
        section { class: "admin-overview",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(error) => rsx! {
                    ErrorState {
                        error,
                        on_retry: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                    }
                },
                ViewState::Ready(overview) => rsx! {
                    dl { class: "stats",
                        dt { "Serial keys" }
                        dd { "{overview.total_keys}" }

                        dt { "Available" }
                        dd { "{overview.available_keys}" }

                        dt { "Redeemed" }
                        dd { "{overview.redeemed_keys}" }

                        dt { "Accesses (7d)" }
                        dd { "{overview.recent_accesses}" }
                    }
                },
            }
        }
    }
}

#[component]
fn SerialKeysPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let mut search = use_signal(String::new);
    let mut status = use_signal(|| None::<SerialKeyStatus>);
    let mut page = use_signal(|| 1_u32);

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let query = ListQuery::new(DEFAULT_PAGE_SIZE)
            .with_search(search())
            .with_page(page());
        let status = status();
        async move {
            let page = catalog
                .serial_keys(&query, status)
                .await
                .map_err(|err| ViewError::from_service(&err))?;
            Ok::<_, ViewError>(SerialKeysData {
                rows: map_serial_key_rows(&page.items),
                pager: PagerVm::from(&page),
            })
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        section { class: "admin-section",
            header { class: "section-header",
                h3 { "Serial keys" }
                SearchBox {
                    value: search(),
                    placeholder: "Search keys",
                    on_input: move |value: String| {
                        search.set(value);
                        page.set(1);
                    },
                }
                select {
                    class: "status-filter",
                    value: status_filter_value(status()),
                    onchange: move |evt| {
                        status.set(parse_status_filter(&evt.value()));
                        page.set(1);
                    },
                    option { value: "", "All statuses" }
                    for option_status in SerialKeyStatus::ALL {
                        option {
                            key: "{option_status}",
                            value: status_filter_value(Some(option_status)),
                            "{option_status.label()}"
                        }
                    }
                }
            }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(error) => rsx! {
                    ErrorState {
                        error,
                        on_retry: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                    }
                },
                ViewState::Ready(data) => rsx! {
                    if data.rows.is_empty() {
                        p { "No serial keys match." }
                    } else {
                        table { class: "list-table",
                            thead {
                                tr {
                                    th { "Code" }
                                    th { "Course" }
                                    th { "Status" }
                                    th { "Redeemed by" }
                                }
                            }
                            tbody {
                                for row in data.rows {
                                    tr { key: "{row.code}",
                                        td { code { "{row.code}" } }
                                        td { "{row.course_title}" }
                                        td { span { class: row.status_class, "{row.status_label}" } }
                                        td { "{row.redeemed_by}" }
                                    }
                                }
                            }
                        }
                    }
                    Pager { pager: data.pager, on_page: move |next| page.set(next) }
                },
            }
        }
    }
}

#[component]
fn AccessLogsPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1_u32);

    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let query = ListQuery::new(DEFAULT_PAGE_SIZE)
            .with_search(search())
            .with_page(page());
        async move {
            let page = catalog
                .access_logs(&query)
                .await
                .map_err(|err| ViewError::from_service(&err))?;
            Ok::<_, ViewError>(AccessLogsData {
                rows: map_access_log_rows(&page.items),
                pager: PagerVm::from(&page),
            })
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        section { class: "admin-section",
            header { class: "section-header",
                h3 { "Access log" }
                SearchBox {
                    value: search(),
                    placeholder: "Search by user or action",
                    on_input: move |value: String| {
                        search.set(value);
                        page.set(1);
                    },
                }
            }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(error) => rsx! {
                    ErrorState {
                        error,
                        on_retry: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                    }
                },
                ViewState::Ready(data) => rsx! {
                    if data.rows.is_empty() {
                        p { "No access recorded." }
                    } else {
                        table { class: "list-table",
                            thead {
                                tr {
                                    th { "When" }
                                    th { "User" }
                                    th { "Action" }
                                }
                            }
                            tbody {
                                for (index, row) in data.rows.into_iter().enumerate() {
                                    tr { key: "{index}",
                                        td { "{row.occurred_at_str}" }
                                        td { "{row.user_email}" }
                                        td { "{row.action}" }
                                    }
                                }
                            }
                        }
                    }
                    Pager { pager: data.pager, on_page: move |next| page.set(next) }
                },
            }
        }
    }
}
