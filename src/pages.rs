//! Server-rendered HTML pages
//!
//! Pages are assembled with `format!` templates; presentation polish is out
//! of scope. The city detail page embeds the suggestion form and the fixed
//! knowledge-base questions, posting to the streaming and Q&A endpoints.

use crate::models::{City, Review};

fn page_shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\
<html><head><title>{title}</title></head><body>\
{body}\
</body></html>"
    )
}

/// City listing page: one link per city.
#[must_use]
pub fn index_page(cities: &[City]) -> String {
    let rows = if cities.is_empty() {
        "<li>No cities found.</li>".to_string()
    } else {
        cities
            .iter()
            .map(|city| {
                format!(
                    "<li><a href=\"/city/{href}\">{name}, {country}</a></li>",
                    href = urlencoding::encode(&city.name),
                    name = city.name,
                    country = city.country_name,
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    page_shell(
        "City Info",
        &format!("<h1>Pick a city</h1><ul>{rows}</ul>"),
    )
}

/// City detail page: things to do, itinerary, reviews, suggestion form, and
/// the fixed knowledge-base questions.
#[must_use]
pub fn city_page(city: &City, reviews: &[Review], kb_prompts: &[&str]) -> String {
    let things_to_do = city
        .top_things_to_do
        .iter()
        .map(|thing| format!("<li>{thing}</li>"))
        .collect::<Vec<_>>()
        .join("\n");

    let itinerary = city.itinerary.replace('\n', "<br>");

    let review_items = reviews
        .iter()
        .map(|review| format!("<li>{} {}</li>", review.stars_display(), review.content))
        .collect::<Vec<_>>()
        .join("\n");

    let kb_buttons = kb_prompts
        .iter()
        .enumerate()
        .map(|(index, prompt)| {
            format!(
                "<button onclick=\"askKb({index})\">{prompt}</button>"
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let href = urlencoding::encode(&city.name);
    let body = format!(
        "<h1>{name}, {country}</h1>\
<h2>Top things to do</h2><ul>{things_to_do}</ul>\
<h2>Itinerary</h2><p>{itinerary}</p>\
<h2>Reviews</h2><ul>{review_items}</ul>\
<h2>Plan your trip</h2>\
<form method=\"post\" action=\"/suggestions/{href}\">\
<label>Days <input type=\"text\" name=\"days\"></label>\
<label><input type=\"checkbox\" name=\"children\" value=\"on\"> With children</label>\
<label><input type=\"checkbox\" name=\"car\" value=\"on\"> I have a car</label>\
<label><input type=\"checkbox\" name=\"interests\" value=\"nightlife\"> Nightlife</label>\
<label><input type=\"checkbox\" name=\"interests\" value=\"museums\"> Museums</label>\
<label><input type=\"checkbox\" name=\"interests\" value=\"food\"> Food</label>\
<button type=\"submit\">Get suggestions</button>\
</form>\
<h2>Ask about the reviews</h2>\
<div>{kb_buttons}</div>\
<div id=\"kb-answer\"></div>\
<script>\
function askKb(index) {{\
  const form = new URLSearchParams();\
  form.append('q', index);\
  fetch('/kb/{href}', {{ method: 'POST', body: form }})\
    .then(r => r.json())\
    .then(data => {{\
      const reviews = (data.Reviews || []).map(r => '<li>' + r + '</li>').join('');\
      document.getElementById('kb-answer').innerHTML =\
        '<p>' + data.Output + '</p><ol>' + reviews + '</ol>';\
    }});\
}}\
</script>",
        name = city.name,
        country = city.country_name,
    );

    page_shell(&format!("{} - City Info", city.name), &body)
}

/// 404 page for unknown city names.
#[must_use]
pub fn not_found_page() -> String {
    page_shell(
        "Not found - City Info",
        "<h1>City not found</h1><p><a href=\"/\">Back to the city list</a></p>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_city() -> City {
        City {
            name: "Test-city-1".into(),
            country_code: "TC1".into(),
            country_name: "TestCountry1".into(),
            top_things_to_do: vec!["TODO1".into(), "TODO2".into()],
            itinerary: "Day one\nDay two".into(),
        }
    }

    #[test]
    fn test_index_page_lists_cities() {
        let html = index_page(&[test_city()]);
        assert!(html.contains("Test-city-1, TestCountry1"));
        assert!(html.contains("/city/Test-city-1"));
    }

    #[test]
    fn test_city_page_renders_details() {
        let reviews = vec![Review {
            city_name: "Test-city-1".into(),
            review_id: "r1".into(),
            content: "This is a review".into(),
            stars: 5,
        }];

        let html = city_page(&test_city(), &reviews, &["What is popular?"]);
        assert!(html.contains("<li>TODO1</li>"));
        assert!(html.contains("<li>TODO2</li>"));
        assert!(html.contains("Day one<br>Day two"));
        assert!(html.contains("⭐️⭐️⭐️⭐️⭐️ This is a review"));
        assert!(html.contains("What is popular?"));
    }

    #[test]
    fn test_city_names_are_url_encoded() {
        let mut city = test_city();
        city.name = "Rio de Janeiro".into();
        let html = index_page(std::slice::from_ref(&city));
        assert!(html.contains("/city/Rio%20de%20Janeiro"));
    }
}
