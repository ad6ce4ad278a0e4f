// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! A function cache over compiled wgpu shader modules.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::images::shader::{FunctionCache, FunctionConstants};

/// One entry point of a compiled module.
#[derive(Debug, Clone)]
pub struct ShaderFunction {
    pub module: wgpu::ShaderModule,
    pub entry_point: String,
}

/**
Named shader functions.

wgpu applies specialization constants when the pipeline is created, not when the module
is compiled, so one function serves every set of constants.
*/
#[derive(Debug)]
pub struct ShaderLibrary {
    device: wgpu::Device,
    functions: RwLock<HashMap<String, ShaderFunction>>,
}

impl ShaderLibrary {
    pub fn new(device: wgpu::Device) -> Self {
        Self {
            device,
            functions: RwLock::new(HashMap::new()),
        }
    }

    /// Compiles `source` and registers each of `entry_points` under its own name.
    pub fn add_wgsl(&self, label: &str, source: &str, entry_points: &[&str]) -> wgpu::ShaderModule {
        let module = self.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(source)),
        });
        for entry_point in entry_points {
            self.insert(
                entry_point.to_string(),
                ShaderFunction {
                    module: module.clone(),
                    entry_point: entry_point.to_string(),
                },
            );
        }
        logwise::info_sync!(
            "Compiled shader module {label} with {count} entry points",
            label = label.to_string(),
            count = entry_points.len()
        );
        module
    }

    /// Registers `function` as `name`, replacing any function already called that.
    pub fn insert(&self, name: String, function: ShaderFunction) {
        self.functions.write().unwrap().insert(name, function);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.read().unwrap().contains_key(name)
    }
}

impl FunctionCache for ShaderLibrary {
    type Function = ShaderFunction;

    fn lookup(&self, name: &str, _constants: &FunctionConstants) -> Option<ShaderFunction> {
        self.functions.read().unwrap().get(name).cloned()
    }
}
