use gloo_console::warn;
use leaflet::{
    LatLng, Map, MapOptions, Marker, MouseEvent, Popup, PopupOptions, TileLayer, TileLayerOptions,
};
use mapty_lib::{
    config::MapConfig,
    map::{MapView, PanOptions},
    render::MarkerPopup,
    Coords,
};
use wasm_bindgen::JsValue;
use web_sys::{
    js_sys::{Object, Reflect},
    HtmlElement,
};
use yew::Callback;

/// Leaflet map living in `container`. Clicks are reported as coordinates through `on_click`.
pub struct LeafletMap {
    map: Map,
}

impl LeafletMap {
    pub fn new(container: &HtmlElement, config: &MapConfig, on_click: Callback<Coords>) -> Self {
        let map = Map::new_with_element(container, &MapOptions::default());
        add_tile_layer(&map, config);

        map.on_mouse_click(Box::new(move |event: MouseEvent| {
            let lat_lng = event.lat_lng();
            on_click.emit(Coords(lat_lng.lat(), lat_lng.lng()));
        }));

        map.invalidate_size(false);

        Self { map }
    }
}

impl MapView for LeafletMap {
    fn set_view(&mut self, center: Coords, zoom: f64, pan: PanOptions) {
        let center = LatLng::new(center.lat(), center.lng());
        if !pan.animate {
            self.map.set_view(&center, zoom);
            return;
        }

        match pan_options(pan.duration_secs) {
            Ok(options) => {
                self.map.set_view_with_options(&center, zoom, &options);
            }
            Err(err) => {
                warn!("Failed to build pan options", err);
                self.map.set_view(&center, zoom);
            }
        }
    }

    fn add_marker(&mut self, at: Coords, popup: &MarkerPopup) {
        let opts = PopupOptions::default();
        opts.set_max_width(popup.max_width);
        opts.set_min_width(popup.min_width);
        opts.set_auto_close(popup.auto_close);
        opts.set_close_on_click(popup.close_on_click);
        opts.set_class_name(popup.class_name.clone());

        let leaflet_popup = Popup::new(&opts, None);
        leaflet_popup.set_content(&popup.content.as_str().into());

        let marker = Marker::new(&LatLng::new(at.lat(), at.lng()));
        marker.add_to(&self.map);
        marker.bind_popup(&leaflet_popup);
        marker.open_popup();
    }
}

fn add_tile_layer(map: &Map, config: &MapConfig) {
    let opts = TileLayerOptions::new();
    opts.set_update_when_idle(true);
    opts.set_attribution(config.attribution.clone());
    TileLayer::new_options(&config.tile_url, &opts).add_to(map);
}

// { animate: true, pan: { duration } }
fn pan_options(duration_secs: f64) -> Result<JsValue, JsValue> {
    let pan = Object::new();
    Reflect::set(&pan, &"duration".into(), &duration_secs.into())?;

    let options = Object::new();
    Reflect::set(&options, &"animate".into(), &JsValue::TRUE)?;
    Reflect::set(&options, &"pan".into(), &pan)?;
    Ok(options.into())
}
