use std::path::{Component, Path, PathBuf};

/// Map a request path onto a file under `root`.
///
/// `/` stands for the default document. Any other path with a trailing
/// slash names a directory, never a servable file, and is refused up front.
/// The path is rebuilt one component at a time so it can never climb out of
/// the root: parent and absolute components refuse the whole path instead
/// of being normalized away. The caller treats a refusal like a file that
/// does not exist.
pub fn file_path(root: &Path, request_path: &str, index: &str) -> Option<PathBuf> {
    let request_path = match request_path {
        "/" => index,
        path => path,
    };

    if request_path.ends_with('/') {
        return None;
    }

    let mut resolved = root.to_path_buf();
    for component in Path::new(request_path.trim_start_matches('/')).components() {
        match component {
            Component::Normal(name) => resolved.push(name),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(path: &str) -> Option<PathBuf> {
        file_path(Path::new("/srv/site"), path, "data-page.html")
    }

    #[test]
    fn joins_onto_root() {
        assert_eq!(
            resolve("/page.html"),
            Some(PathBuf::from("/srv/site/page.html"))
        );
        assert_eq!(
            resolve("/assets/app.js"),
            Some(PathBuf::from("/srv/site/assets/app.js"))
        );
    }

    #[test]
    fn root_path_becomes_default_document() {
        assert_eq!(resolve("/"), Some(PathBuf::from("/srv/site/data-page.html")));
    }

    #[test]
    fn refuses_parent_components() {
        assert_eq!(resolve("/../secret.txt"), None);
        assert_eq!(resolve("/a/../../secret.txt"), None);
        assert_eq!(resolve("/.."), None);
    }

    #[test]
    fn current_dir_components_are_dropped() {
        assert_eq!(
            resolve("/./page.html"),
            Some(PathBuf::from("/srv/site/page.html"))
        );
    }

    #[test]
    fn repeated_separators_collapse() {
        assert_eq!(
            resolve("//page.html"),
            Some(PathBuf::from("/srv/site/page.html"))
        );
    }

    #[test]
    fn trailing_slash_is_refused() {
        assert_eq!(resolve("/page.html/"), None);
        assert_eq!(resolve("/assets/"), None);
    }

    #[test]
    fn default_document_is_sandboxed_too() {
        assert_eq!(
            file_path(Path::new("/srv/site"), "/", "../outside.html"),
            None
        );
    }
}
