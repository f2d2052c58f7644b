//! Page composer — wraps a content region in the shared dashboard chrome.
//!
//! Composition is split in two pure steps: [`PageComposer::compose`] builds a
//! [`PageView`] from the navigation state, and [`PageComposer::render`] turns
//! a view into HTML with minijinja. Tests exercise the first step without any
//! markup.

use std::collections::HashMap;

use minijinja::{context, Environment};
use serde::Serialize;
use tracing::warn;

use labnav_common::error::Result;
use labnav_common::DocTypeAllowList;
use labnav_config::BrandingConfig;

use crate::navigation::NavigationState;
use crate::pages::{ContentRegion, DashboardPage, HomePage, PageComponent, PageRequest};
use crate::routes::{PageId, PageWidth, RouteTable};

const LAYOUT_TEMPLATE: &str = "layout.html";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Everything needed to draw one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub title: String,
    pub tagline: String,
    pub width: PageWidth,
    pub nav: Vec<NavLink>,
    pub content: ContentRegion,
    pub footer: String,
}

impl PageView {
    pub fn active_links(&self) -> impl Iterator<Item = &NavLink> {
        self.nav.iter().filter(|link| link.active)
    }
}

pub struct PageComposer {
    env: Environment<'static>,
    components: HashMap<PageId, Box<dyn PageComponent>>,
    branding: BrandingConfig,
}

impl PageComposer {
    /// An empty composer with the layout templates loaded.
    pub fn new(branding: BrandingConfig) -> std::result::Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(LAYOUT_TEMPLATE, include_str!("../templates/layout.html"))?;
        env.add_template("content.html", include_str!("../templates/content.html"))?;
        env.add_filter("container_class", container_class);

        Ok(Self {
            env,
            components: HashMap::new(),
            branding,
        })
    }

    /// A composer with the five dashboard pages registered.
    pub fn standard(
        branding: BrandingConfig,
        doc_types: DocTypeAllowList,
    ) -> std::result::Result<Self, minijinja::Error> {
        let mut composer = Self::new(branding)?;
        composer.register(HomePage::new(doc_types));
        composer.register(DashboardPage::uploader());
        composer.register(DashboardPage::feedback_analytics());
        composer.register(DashboardPage::search_quality());
        composer.register(DashboardPage::security_audit());
        Ok(composer)
    }

    /// Panics if a component for the same page id is already registered.
    pub fn register(&mut self, component: impl PageComponent + 'static) {
        let page_id = component.page_id();
        if self.components.contains_key(&page_id) {
            panic!("Duplicate page component: {:?}", page_id);
        }
        self.components.insert(page_id, Box::new(component));
    }

    /// Builds the view for the page `nav` is currently on.
    pub fn compose(&self, nav: &NavigationState, request: &PageRequest) -> Result<PageView> {
        let entry = nav.active_entry();
        let content = match self.components.get(&entry.page_id) {
            Some(component) => component.content(request)?,
            None => {
                warn!(page = ?entry.page_id, "No component registered, rendering fallback");
                ContentRegion::fallback(entry.path)
            }
        };

        Ok(PageView {
            title: self.branding.title.clone(),
            tagline: entry.tagline.to_string(),
            width: entry.width,
            nav: nav_links(nav.routes(), |path| nav.is_active(path)),
            content,
            footer: self.branding.footer.clone(),
        })
    }

    /// Builds the page shown for a path with no route. Every link is shown
    /// and none is active.
    pub fn compose_unroutable(&self, nav: &NavigationState, requested_path: &str) -> PageView {
        PageView {
            title: self.branding.title.clone(),
            tagline: "Page not found".to_string(),
            width: PageWidth::Narrow,
            nav: nav_links(nav.routes(), |_| false),
            content: ContentRegion::fallback(requested_path),
            footer: self.branding.footer.clone(),
        }
    }

    pub fn render(&self, view: &PageView) -> std::result::Result<String, minijinja::Error> {
        self.env
            .get_template(LAYOUT_TEMPLATE)?
            .render(context! { page => view })
    }
}

fn nav_links(routes: &RouteTable, is_active: impl Fn(&str) -> bool) -> Vec<NavLink> {
    routes
        .entries()
        .iter()
        .map(|entry| NavLink {
            path: entry.path,
            label: entry.label,
            active: is_active(entry.path),
        })
        .collect()
}

fn container_class(width: &str) -> &'static str {
    match width {
        "wide" => "max-w-6xl",
        "full" => "max-w-7xl",
        _ => "max-w-4xl",
    }
}
