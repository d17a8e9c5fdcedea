use std::path::Path;

/// Candidate extension order for resolving an import written in `path`.
///
/// `.ts` files prefer TypeScript targets; everything else, `.tsx` included,
/// prefers JavaScript. Cross-family extensions stay in the list as fallbacks
/// so a `.ts` file can still import a `.js` module and vice versa.
pub fn supported_extensions(path: &Path) -> [&'static str; 4] {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ts") => [".ts", ".tsx", ".js", ".jsx"],
        _ => [".js", ".jsx", ".ts", ".tsx"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typescript_family_first_for_ts_only() {
        assert_eq!(
            supported_extensions(Path::new("/repo/src/app.ts")),
            [".ts", ".tsx", ".js", ".jsx"]
        );
    }

    #[test]
    fn javascript_family_first_otherwise() {
        assert_eq!(
            supported_extensions(Path::new("/repo/src/app.js")),
            [".js", ".jsx", ".ts", ".tsx"]
        );
        assert_eq!(
            supported_extensions(Path::new("/repo/src/view.jsx")),
            [".js", ".jsx", ".ts", ".tsx"]
        );
        // .tsx is the markup companion, not the statically-typed source
        // extension itself, so it keeps the JS-first order.
        assert_eq!(
            supported_extensions(Path::new("/repo/src/view.tsx")),
            [".js", ".jsx", ".ts", ".tsx"]
        );
        // No extension at all still gets the JS-first order.
        assert_eq!(
            supported_extensions(Path::new("/repo/src/app")),
            [".js", ".jsx", ".ts", ".tsx"]
        );
    }
}
