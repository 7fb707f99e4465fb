//! Base-path aware link building
//!
//! Internal links must resolve whether the site is served from the domain root
//! or from a sub-path such as a project pages directory. Every function here is
//! total: any input string maps to a well-formed result.

/// Base prefix used when the site is deployed at the domain root
pub const DEFAULT_BASE: &str = "/";

/// Ensure a path ends with a trailing slash
///
/// Paths that already end with `/` are returned unchanged, otherwise a single
/// `/` is appended. The empty string becomes `/`.
///
/// # Examples
/// ```
/// use floral_site::normalize;
///
/// assert_eq!(normalize("/path"), "/path/");
/// assert_eq!(normalize("path/"), "path/");
/// assert_eq!(normalize(""), "/");
/// ```
pub fn normalize(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

/// Join a relative fragment onto a base prefix
///
/// The base loses any run of trailing slashes and gets exactly one back (an
/// empty base becomes `/`). The fragment loses its leading slashes. The result
/// always starts with `/` and has exactly one `/` at the boundary. Fragments
/// are never given a trailing slash, so file names survive as written.
///
/// # Examples
/// ```
/// use floral_site::join;
///
/// assert_eq!(join("contacto/", "/"), "/contacto/");
/// assert_eq!(join("//contacto/", "/app///"), "/app/contacto/");
/// assert_eq!(join("images/logo.png", "/site"), "/site/images/logo.png");
/// assert_eq!(join("", ""), "/");
/// ```
pub fn join(path: &str, base: &str) -> String {
    let base_trimmed = base.trim_end_matches('/');
    let fragment = path.trim_start_matches('/');

    // Empty and relative bases ("app") are rooted at "/"
    let mut joined = String::with_capacity(base_trimmed.len() + fragment.len() + 2);
    if !base_trimmed.starts_with('/') {
        joined.push('/');
    }
    joined.push_str(base_trimmed);
    if !base_trimmed.is_empty() {
        joined.push('/');
    }
    joined.push_str(fragment);
    joined
}

/// Join a fragment onto the default root base
///
/// # Examples
/// ```
/// use floral_site::link;
///
/// assert_eq!(link("contacto/"), "/contacto/");
/// assert_eq!(link(""), "/");
/// ```
pub fn link(path: &str) -> String {
    join(path, DEFAULT_BASE)
}

/// Collapse a run of trailing slashes on a base prefix into a single one
///
/// A base without trailing slash is left as written; [`join`] supplies the
/// separator later.
///
/// # Examples
/// ```
/// use floral_site::collapse_base;
///
/// assert_eq!(collapse_base("/terapia-floral-silvia///"), "/terapia-floral-silvia/");
/// assert_eq!(collapse_base("/"), "/");
/// assert_eq!(collapse_base("/app"), "/app");
/// ```
pub fn collapse_base(base: &str) -> String {
    let trimmed = base.trim_end_matches('/');
    if trimmed.len() == base.len() {
        base.to_string()
    } else {
        format!("{}/", trimmed)
    }
}
