#[derive(serde::Deserialize)]
pub struct SavePage {
    #[serde(default)]
    pub body: String,
}

#[derive(serde::Deserialize)]
pub struct CreatePage {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub body: String,
}
