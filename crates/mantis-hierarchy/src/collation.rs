//! Name ordering for lists and trees.
//!
//! Names are compared the way a user-facing locale sort does at its primary
//! strength: case and Latin diacritics are ignored first (`"área" == "Area"`),
//! then accents break ties, then case with lowercase first (`"a" < "A"`), and
//! finally the raw strings so the order stays total.

use std::cmp::Ordering;

/// Compare two display names.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| case_key(a).cmp(case_key(b)))
        .then_with(|| a.cmp(b))
}

/// `false` for each lowercase or uncased char, `true` for uppercase.
fn case_key(name: &str) -> impl Iterator<Item = bool> + '_ {
    name.chars().map(char::is_uppercase)
}

fn primary_key(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase).map(fold_diacritic)
}

fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|s| (*s).to_string()).collect();
        v.sort_by(|a, b| compare_names(a, b));
        v
    }

    #[test]
    fn case_does_not_split_groups() {
        assert_eq!(sorted(&["beta", "Alpha", "alpha2", "Beta2"]), [
            "Alpha", "alpha2", "beta", "Beta2"
        ]);
    }

    #[test]
    fn accents_sort_with_base_letter() {
        assert_eq!(sorted(&["Zona", "Área Norte", "Bombas"]), [
            "Área Norte",
            "Bombas",
            "Zona"
        ]);
        assert_eq!(sorted(&["Molino", "Mólido", "Mezcla"]), [
            "Mezcla", "Mólido", "Molino"
        ]);
    }

    #[test]
    fn lowercase_sorts_before_uppercase_on_ties() {
        assert_eq!(sorted(&["A", "a", "Bomba", "bomba"]), ["a", "A", "bomba", "Bomba"]);
        assert_eq!(sorted(&["ÁREA", "área", "Area", "area"]), [
            "area", "Area", "área", "ÁREA"
        ]);
    }

    #[test]
    fn ties_are_broken_deterministically() {
        assert_eq!(compare_names("area", "Area"), compare_names("area", "Area"));
        assert_eq!(compare_names("area", "Area"), Ordering::Less);
        assert_eq!(compare_names("Linea", "Linea"), Ordering::Equal);
    }
}
