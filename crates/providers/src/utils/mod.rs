mod url;

pub(crate) use url::create_model_url;
