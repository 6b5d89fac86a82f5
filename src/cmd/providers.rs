use multiplayer::Multiplayer;

pub fn cmd_providers(multiplayer: &Multiplayer) {
    for (name, descriptor) in multiplayer.registry().iter() {
        println!("{name}");
        println!("   Pattern: {}", descriptor.id.as_deref().unwrap_or("<missing>"));
        println!("   Player:  {}", descriptor.url.as_deref().unwrap_or("<missing>"));
        for (option, target) in &descriptor.map {
            let targets = target.targets();
            if targets.is_empty() {
                println!("   {option} -> (inert)");
            } else {
                println!("   {option} -> {}", targets.join(", "));
            }
        }
    }

    println!("\n({} providers)", multiplayer.registry().len());
}
