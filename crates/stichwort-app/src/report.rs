//! The fixed lookup report: redirect notice, surface IPA, root IPA,
//! then the info block.

use stichwort_core::word::WordInfo;

pub fn render(info: &WordInfo) -> String {
    let mut out = String::new();
    if info.redirected {
        out.push_str(&format!("Redirecting to {}\n\n", info.root_word));
    }
    out.push_str(&format!("IPA: {}\n\n", info.ipa));
    if info.redirected {
        out.push_str(&format!("root IPA: {}\n\n", info.root_ipa));
    }
    out.push_str(&info.info_text);
    if !info.info_text.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(redirected: bool) -> WordInfo {
        WordInfo {
            surface_word: "ging".to_owned(),
            root_word: if redirected { "gehen" } else { "ging" }.to_owned(),
            ipa: "ɡɪŋ".to_owned(),
            root_ipa: "ˈɡeːən".to_owned(),
            pronunciation_url: String::new(),
            root_pronunciation_url: String::new(),
            info_text: "Verb\n[1] sich fortbewegen".to_owned(),
            redirected,
            root_html: None,
        }
    }

    #[test]
    fn a_redirected_lookup_reports_both_transcriptions() {
        let rendered = render(&info(true));
        assert_eq!(
            rendered,
            "Redirecting to gehen\n\nIPA: ɡɪŋ\n\nroot IPA: ˈɡeːən\n\nVerb\n[1] sich fortbewegen\n"
        );
    }

    #[test]
    fn a_direct_lookup_skips_the_redirect_lines() {
        let rendered = render(&info(false));
        assert_eq!(rendered, "IPA: ɡɪŋ\n\nVerb\n[1] sich fortbewegen\n");
    }
}
