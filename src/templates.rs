//! Source files generated around the route table.
//!
//! `routes.tsx` embeds the emitted array under the `routes` symbol, `app.tsx`
//! renders it inside `<Routes>`, and `index.tsx` mounts the application.

use crate::deriver::PathStyle;

/// Name of the generated route module.
pub const ROUTES_FILE: &str = "routes.tsx";
/// Name of the generated application shell.
pub const APP_FILE: &str = "app.tsx";
/// Name of the generated entry point.
pub const INDEX_FILE: &str = "index.tsx";

const ROUTES_HEADER: &str = r#"import { FC, LazyExoticComponent, ReactNode, lazy } from 'react'
import { Route } from 'react-router-dom'

interface IRoute {
  path: string
  element?: LazyExoticComponent<() => ReactNode> | LazyExoticComponent<FC>,
  children?: IRoute[]
}

const routes: IRoute[] = "#;

// Relative paths: child routes nest inside their parent and drop the
// leading slash. A parent page becomes the index route of its own path.
const NESTED_RENDERER: &str = r#"

export function renderRoutes (routeList: IRoute[], nested = false): ReactNode[] {
  return routeList.map((route: IRoute) => {
    const path = nested ? route.path.replace(/^\/+/, '') : route.path

    if (!route.children) {
      return (
        <Route
          key={route.path}
          path={path || undefined}
          index={!path || undefined}
          element={route.element && <route.element /> as any} />
      )
    }

    return (
      <Route key={route.path} path={path || undefined}>
        {route.element && <Route index element={<route.element /> as any} />}
        {renderRoutes(route.children, true)}
      </Route>
    )
  })
}

export default routes
"#;

// Absolute paths: every route is registered at the top level.
const FLAT_RENDERER: &str = r#"

export function renderRoutes (routeList: IRoute[]): ReactNode[] {
  return routeList.flatMap((route: IRoute) => [
    route.element && (
      <Route
        key={route.path}
        path={route.path}
        element={<route.element /> as any} />
    ),
    ...(route.children ? renderRoutes(route.children) : [])
  ])
}

export default routes
"#;

const APP_TEMPLATE: &str = r#"import { Routes } from 'react-router-dom'
import routes, { renderRoutes } from './routes'

export function App () {
  return <Routes>{renderRoutes(routes)}</Routes>
}
"#;

const INDEX_TEMPLATE: &str = r#"import ReactDOM from 'react-dom/client'
import { BrowserRouter as Router } from 'react-router-dom'
import Layout from './layout'
import { App } from './app'

ReactDOM.createRoot(document.getElementById('app')!).render(
  <Router>
    <Layout>
      <App />
    </Layout>
  </Router>
)
"#;

/// A generated file, named relative to the migration target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: &'static str,
    pub contents: String,
}

/// Wraps an emitted route array into the `routes.tsx` module.
///
/// The `renderRoutes` function matches `style`, the style the array was
/// derived with.
pub fn render_routes_module(routes_fragment: &str, style: PathStyle) -> String {
    let renderer = match style {
        PathStyle::Relative => NESTED_RENDERER,
        PathStyle::Absolute => FLAT_RENDERER,
    };
    format!("{}{}{}", ROUTES_HEADER, routes_fragment, renderer)
}

/// All generated files, in the order they are written.
pub fn generated_files(routes_fragment: &str, style: PathStyle) -> Vec<GeneratedFile> {
    vec![
        GeneratedFile {
            name: ROUTES_FILE,
            contents: render_routes_module(routes_fragment, style),
        },
        GeneratedFile {
            name: APP_FILE,
            contents: APP_TEMPLATE.to_string(),
        },
        GeneratedFile {
            name: INDEX_FILE,
            contents: INDEX_TEMPLATE.to_string(),
        },
    ]
}
