// src/constants.rs
//
// Application-wide constants. Each constant is documented with its purpose and usage context.

/// Top-level heading of the landing page.
///
/// Used in: `application/home.rs`
pub const HEADING_TEXT: &str = "Welcome to Notion Clone";

/// Subtitle shown below the heading.
///
/// Used in: `application/home.rs`
pub const SUBTITLE_TEXT: &str = "Your advanced note-taking application";

/// Default `<title>` of the generated HTML document.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_PAGE_TITLE: &str = "Notion Clone";

/// Tailwind Play CDN, loaded instead of the inline stylesheet in `cdn` mode.
///
/// Used in: `ports/html.rs`
pub const TAILWIND_CDN_URL: &str = "https://cdn.tailwindcss.com";

/// Delay in milliseconds after launching the browser before returning.
///
/// The temp directory holding the page is removed when the renderer is dropped,
/// so the browser needs a moment to read the file first.
///
/// Used in: `infrastructure/config.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;

/// Prefix of the temporary directory the page is written to before opening.
///
/// Used in: `infrastructure/renderer.rs`
pub const TEMP_DIR_PREFIX: &str = "notion-clone-";

/// Directory name below the platform config dir, and the config file name inside it.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_DIR_NAME: &str = "notion-clone";
pub const CONFIG_FILE_NAME: &str = "config.toml";
