//! Static redirect page written at the web root.

/// HTML document that refreshes to `target` immediately.
///
/// No trailing newline; the bytes are stable across runs.
pub fn redirect_document(target: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n    \
         <meta charset=\"utf-8\">\n    \
         <meta http-equiv=\"refresh\" content=\"0; url={target}\" />\n\
         </head>\n\
         <body>\n\
         </body>\n\
         </html>"
    )
}
