use crate::presentation::view_models::{ModuleEntry, ModuleListViewModel};
use da6_types::HomeModule;

pub fn present_module_list(modules: &[HomeModule]) -> ModuleListViewModel {
    let entries = modules
        .iter()
        .enumerate()
        .map(|(index, module)| ModuleEntry {
            position: index + 1,
            id: module.id.clone(),
            title: module.title.clone(),
            subtitle: module.subtitle.clone(),
            description: module.description.clone(),
            section: module.section().map(|section| section.to_string()),
            link: module.link.clone(),
            color: module.color.clone(),
        })
        .collect();

    ModuleListViewModel {
        modules: entries,
        total: modules.len(),
    }
}
