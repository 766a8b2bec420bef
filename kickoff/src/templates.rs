//! Files written into generated projects, embedded at compile time.

/// `src/App.jsx` after the Vite boilerplate is removed.
pub const MINIMAL_APP: &str = include_str!("../templates/react/App.minimal.jsx");

/// Vite boilerplate removed by the cleanup step.
pub const REACT_BOILERPLATE: &[&str] = &["src/assets/react.svg", "public/vite.svg", "src/App.css"];

pub const ROUTER_DIRS: &[&str] = &["src/pages", "src/components", "src/routes"];

/// React Router pages, layout and entry point, keyed by project-relative path.
pub const ROUTER_FILES: &[(&str, &str)] = &[
    ("src/pages/Home.jsx", include_str!("../templates/react/Home.jsx")),
    ("src/pages/About.jsx", include_str!("../templates/react/About.jsx")),
    ("src/components/Navbar.jsx", include_str!("../templates/react/Navbar.jsx")),
    ("src/components/Footer.jsx", include_str!("../templates/react/Footer.jsx")),
    ("src/pages/NotFound.jsx", include_str!("../templates/react/NotFound.jsx")),
    ("src/routes/AppRoutes.jsx", include_str!("../templates/react/AppRoutes.jsx")),
    ("src/App.jsx", include_str!("../templates/react/App.router.jsx")),
    ("src/main.jsx", include_str!("../templates/react/main.jsx")),
];

pub const TAILWIND_FILES: &[(&str, &str)] = &[
    ("tailwind.config.js", include_str!("../templates/tailwind/tailwind.config.js")),
    ("postcss.config.js", include_str!("../templates/tailwind/postcss.config.js")),
];

pub const TAILWIND_DIRECTIVES: &str = include_str!("../templates/tailwind/directives.css");
