//! Page Rendering
//!
//! Handlebars templates compiled into the binary, one per page, plus the
//! `ctime` helper that turns epoch milliseconds into local wall-clock time.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::{Local, TimeZone};
use handlebars::{Handlebars, RenderError, TemplateError, handlebars_helper};
use serde::Serialize;
use std::fmt::Display;

use crate::api::error::{ApiError, ApiResult};

/// Display format for log and task timestamps
const CTIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// The pages the dashboard can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Cluster,
    Services,
    Tasks,
    TaskLog,
    Error,
}

impl Page {
    fn template_name(&self) -> &'static str {
        match self {
            Page::Index => "index",
            Page::Cluster => "cluster",
            Page::Services => "service",
            Page::Tasks => "task",
            Page::TaskLog => "log",
            Page::Error => "error",
        }
    }
}

/// Formats epoch milliseconds in the given time zone
///
/// Values chrono cannot represent are shown as the raw number.
pub fn format_ctime<Tz>(millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    tz.timestamp_millis_opt(millis)
        .earliest()
        .map(|t| t.format(CTIME_FORMAT).to_string())
        .unwrap_or_else(|| millis.to_string())
}

handlebars_helper!(ctime: |millis: i64| format_ctime(millis, &Local));

#[derive(Serialize)]
struct ErrorContext {
    status: u16,
    reason: &'static str,
    message: String,
}

/// Page renderer shared by all handlers
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    /// Compiles every page template
    pub fn new() -> Result<Self, TemplateError> {
        let mut handlebars = Handlebars::new();

        handlebars.register_partial("header", include_str!("../../templates/header.hbs"))?;
        handlebars.register_partial("footer", include_str!("../../templates/footer.hbs"))?;

        handlebars.register_template_string("index", include_str!("../../templates/index.hbs"))?;
        handlebars
            .register_template_string("cluster", include_str!("../../templates/cluster.hbs"))?;
        handlebars
            .register_template_string("service", include_str!("../../templates/service.hbs"))?;
        handlebars.register_template_string("task", include_str!("../../templates/task.hbs"))?;
        handlebars.register_template_string("log", include_str!("../../templates/log.hbs"))?;
        handlebars.register_template_string("error", include_str!("../../templates/error.hbs"))?;

        handlebars.register_helper("ctime", Box::new(ctime));

        Ok(Self { handlebars })
    }

    /// Render a page to an HTML string
    pub fn render<T: Serialize>(&self, page: Page, data: &T) -> Result<String, RenderError> {
        self.handlebars.render(page.template_name(), data)
    }

    /// Render a handler result: the page on success, the error page otherwise
    pub fn page<T: Serialize>(&self, page: Page, result: ApiResult<T>) -> Response {
        match result {
            Ok(view) => match self.render(page, &view) {
                Ok(html) => Html(html).into_response(),
                Err(err) => render_failure(page, err),
            },
            Err(err) => self.error_page(&err),
        }
    }

    fn error_page(&self, err: &ApiError) -> Response {
        let status = err.status();
        let context = ErrorContext {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error"),
            message: err.message(),
        };

        match self.render(Page::Error, &context) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(render_err) => render_failure(Page::Error, render_err),
        }
    }
}

fn render_failure(page: Page, err: RenderError) -> Response {
    tracing::error!("Failed to render {:?} page: {}", page, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
        .into_response()
}
