// src/gui/router.rs
use crate::{config::options::VisualOptions, load::Dataset};
use super::scenes::{
    flower::FlowerScene, starburst::StarburstScene, typhoon::TyphoonScene, Scene,
};

/// The dataset decides the scene; options carry the variant's look.
pub fn scene_for(opts: VisualOptions, data: Dataset) -> Box<dyn Scene> {
    match data {
        Dataset::Tides(samples)    => Box::new(StarburstScene::new(opts, &samples)),
        Dataset::Climate(table)    => Box::new(FlowerScene::new(opts, table)),
        Dataset::Typhoon(warnings) => Box::new(TyphoonScene::new(opts, warnings)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::VariantKind;
    use crate::data::Sample;

    #[test]
    fn tides_get_the_starburst() {
        let opts = VisualOptions::for_variant(VariantKind::TidalStarburst);
        let scene = scene_for(opts, Dataset::Tides(vec![Sample::new("00:00", 1.0)]));
        assert_eq!(scene.label(), "Tidal starburst");
    }
}
