//! Named SPARQL query templates and endpoint presets.
//!
//! Templates seed the query editor; they are plain static text and are never
//! parsed or validated here. Endpoint presets map short names to the query
//! service URLs they stand for; any other string is treated as a verbatim
//! URL by [`resolve_endpoint`].

const COMPUTER_SCIENTISTS: &str = r#"PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

SELECT ?scientist ?scientistLabel ?birthDate WHERE {
  ?scientist wdt:P106 wd:Q82594 .
  ?scientist wdt:P31 wd:Q5 .
  OPTIONAL { ?scientist wdt:P569 ?birthDate . }
  SERVICE wikibase:label { bd:serviceParam wikibase:language "[AUTO_LANGUAGE],en". }
}
ORDER BY DESC(xsd:integer(SUBSTR(STR(?birthDate), 1, 4)))
LIMIT 20"#;

const CAPITALS: &str = r#"PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

SELECT ?country ?countryLabel ?capital ?capitalLabel WHERE {
  ?country wdt:P31 wd:Q6256 .
  ?country wdt:P36 ?capital .
  SERVICE wikibase:label { bd:serviceParam wikibase:language "[AUTO_LANGUAGE],en". }
}
ORDER BY ?countryLabel
LIMIT 25"#;

const DOUGLAS_ADAMS_IMAGE: &str = r#"PREFIX wd: <http://www.wikidata.org/entity/>
PREFIX wdt: <http://www.wikidata.org/prop/direct/>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>

SELECT ?item ?itemLabel ?image WHERE {
  BIND(wd:Q42 AS ?item)
  OPTIONAL { ?item wdt:P18 ?image . }
  SERVICE wikibase:label { bd:serviceParam wikibase:language "[AUTO_LANGUAGE],en". }
}"#;

const TEMPLATES: &[(&str, &str)] = &[
    ("computer-scientists", COMPUTER_SCIENTISTS),
    ("capitals", CAPITALS),
    ("douglas-adams-image", DOUGLAS_ADAMS_IMAGE),
];

const ENDPOINTS: &[(&str, &str)] = &[
    ("wikidata", "https://query.wikidata.org/sparql"),
    ("europeana", "http://sparql.europeana.eu/"),
];

/// All templates in display order.
pub fn templates() -> impl Iterator<Item = (&'static str, &'static str)> {
    TEMPLATES.iter().copied()
}

/// Looks up a template body by name.
pub fn template(name: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, body)| *body)
}

/// All endpoint presets in display order.
pub fn endpoints() -> impl Iterator<Item = (&'static str, &'static str)> {
    ENDPOINTS.iter().copied()
}

/// Looks up an endpoint preset URL by name.
pub fn endpoint(name: &str) -> Option<&'static str> {
    ENDPOINTS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, url)| *url)
}

/// Resolves a user-supplied endpoint argument: a preset name if it matches
/// one, the argument itself otherwise.
pub fn resolve_endpoint(arg: &str) -> &str {
    endpoint(arg).unwrap_or(arg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_are_resolvable_by_name() {
        for (name, body) in templates() {
            assert_eq!(template(name), Some(body));
            assert!(!body.trim().is_empty());
        }
        assert_eq!(template("no-such-template"), None);
    }

    #[test]
    fn resolve_endpoint_falls_back_to_verbatim_url() {
        assert_eq!(resolve_endpoint("wikidata"), "https://query.wikidata.org/sparql");
        assert_eq!(
            resolve_endpoint("http://localhost:1234/sparql"),
            "http://localhost:1234/sparql"
        );
    }
}
