//! Emits the route table as a TypeScript array literal.
//!
//! The output is a fragment meant to be embedded in `routes.tsx`:
//!
//! ```text
//! [
//!   {
//!     path: '/blog',
//!     element: lazy(() => import('./app/blog/page')),
//!   },
//! ]
//! ```

use crate::conventions::Conventions;
use crate::deriver::RouteDescriptor;
use log::debug;

const INDENT: &str = "  ";

/// Emits `routes` as an array of route object literals.
///
/// Fields appear in the order `path`, `element`, `children`. `element` is
/// written only for routes with a page, `children` only when non-empty.
pub fn emit_routes(routes: &[RouteDescriptor], conventions: &Conventions) -> String {
    debug!("Emitting {} top-level routes", routes.len());
    let mut out = String::new();
    emit_array(&mut out, routes, conventions, 0);
    out
}

fn emit_array(
    out: &mut String,
    routes: &[RouteDescriptor],
    conventions: &Conventions,
    depth: usize,
) {
    if routes.is_empty() {
        out.push_str("[]");
        return;
    }

    out.push_str("[\n");
    for route in routes {
        emit_route(out, route, conventions, depth + 1);
    }
    out.push_str(&INDENT.repeat(depth));
    out.push(']');
}

fn emit_route(out: &mut String, route: &RouteDescriptor, conventions: &Conventions, depth: usize) {
    let outer = INDENT.repeat(depth);
    let inner = INDENT.repeat(depth + 1);

    out.push_str(&outer);
    out.push_str("{\n");

    out.push_str(&format!("{}path: {},\n", inner, quote(&route.path)));

    if route.has_page {
        let module = format!("{}/{}", route.source, conventions.page_module);
        out.push_str(&format!(
            "{}element: {}(() => import({})),\n",
            inner,
            conventions.lazy_loader,
            quote(&module)
        ));
    }

    if !route.children.is_empty() {
        out.push_str(&inner);
        out.push_str("children: ");
        emit_array(out, &route.children, conventions, depth + 1);
        out.push_str(",\n");
    }

    out.push_str(&outer);
    out.push_str("},\n");
}

/// Single-quoted string literal.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            c => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}
