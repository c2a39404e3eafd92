use super::*;

impl<'a> StationRepo for DbReadOnly<'a> {
    fn create_station(&self, _station: &ChargingStation) -> Result<()> {
        unreachable!();
    }
    fn update_station(&self, _station: &ChargingStation) -> Result<()> {
        unreachable!();
    }
    fn delete_station(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_station(&self, id: &Id) -> Result<ChargingStation> {
        get_station(&mut self.conn.borrow_mut(), id)
    }
    fn all_stations(&self, kind: Option<ChargerKind>) -> Result<Vec<ChargingStation>> {
        all_stations(&mut self.conn.borrow_mut(), kind)
    }
    fn stations_of_owner(&self, owner: &Id) -> Result<Vec<ChargingStation>> {
        stations_of_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn count_stations(&self) -> Result<usize> {
        count_stations(&mut self.conn.borrow_mut())
    }
}

impl<'a> StationRepo for DbReadWrite<'a> {
    fn create_station(&self, station: &ChargingStation) -> Result<()> {
        create_station(&mut self.conn.borrow_mut(), station)
    }
    fn update_station(&self, station: &ChargingStation) -> Result<()> {
        update_station(&mut self.conn.borrow_mut(), station)
    }
    fn delete_station(&self, id: &Id) -> Result<()> {
        delete_station(&mut self.conn.borrow_mut(), id)
    }

    fn get_station(&self, id: &Id) -> Result<ChargingStation> {
        get_station(&mut self.conn.borrow_mut(), id)
    }
    fn all_stations(&self, kind: Option<ChargerKind>) -> Result<Vec<ChargingStation>> {
        all_stations(&mut self.conn.borrow_mut(), kind)
    }
    fn stations_of_owner(&self, owner: &Id) -> Result<Vec<ChargingStation>> {
        stations_of_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn count_stations(&self) -> Result<usize> {
        count_stations(&mut self.conn.borrow_mut())
    }
}

impl<'a> StationRepo for DbConnection<'a> {
    fn create_station(&self, station: &ChargingStation) -> Result<()> {
        create_station(&mut self.conn.borrow_mut(), station)
    }
    fn update_station(&self, station: &ChargingStation) -> Result<()> {
        update_station(&mut self.conn.borrow_mut(), station)
    }
    fn delete_station(&self, id: &Id) -> Result<()> {
        delete_station(&mut self.conn.borrow_mut(), id)
    }

    fn get_station(&self, id: &Id) -> Result<ChargingStation> {
        get_station(&mut self.conn.borrow_mut(), id)
    }
    fn all_stations(&self, kind: Option<ChargerKind>) -> Result<Vec<ChargingStation>> {
        all_stations(&mut self.conn.borrow_mut(), kind)
    }
    fn stations_of_owner(&self, owner: &Id) -> Result<Vec<ChargingStation>> {
        stations_of_owner(&mut self.conn.borrow_mut(), owner)
    }
    fn count_stations(&self) -> Result<usize> {
        count_stations(&mut self.conn.borrow_mut())
    }
}

fn new_station(s: &ChargingStation) -> models::NewStation<'_> {
    models::NewStation {
        id: s.id.as_str(),
        kind: store_charger_kind(s.kind),
        location: s.location.as_deref(),
        lat: s.pos.map(MapPoint::lat),
        lng: s.pos.map(MapPoint::lng),
        price: s.price,
        rating: s.rating,
        charging_rate: s.charging_rate,
        picture: s.picture.as_deref(),
        description: s.description.as_deref(),
        owner: s.owner.as_ref().map(Id::as_str),
    }
}

fn replace_station_reactions(
    conn: &mut SqliteConnection,
    station_rowid: i64,
    reactions: &Reactions,
) -> Result<()> {
    use schema::station_reaction::dsl;
    diesel::delete(dsl::station_reaction.filter(dsl::station_rowid.eq(station_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let rows: Vec<_> = reaction_rows(reactions)
        .map(|(user_id, reaction)| models::NewStationReaction {
            station_rowid,
            user_id: user_id.as_str(),
            reaction,
        })
        .collect();
    if rows.is_empty() {
        return Ok(());
    }
    diesel::insert_into(schema::station_reaction::table)
        .values(&rows)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_station(conn: &mut SqliteConnection, entity: models::StationEntity) -> Result<ChargingStation> {
    use schema::station_reaction::dsl;
    let models::StationEntity {
        rowid,
        id,
        kind,
        location,
        lat,
        lng,
        price,
        rating,
        charging_rate,
        picture,
        description,
        owner,
    } = entity;
    let pos = match (lat, lng) {
        (Some(lat), Some(lng)) => MapPoint::try_from_lat_lng_deg(lat, lng),
        _ => None,
    };
    let reactions = dsl::station_reaction
        .select((dsl::user_id, dsl::reaction))
        .filter(dsl::station_rowid.eq(rowid))
        .order_by(dsl::rowid)
        .load::<(String, i16)>(conn)
        .map_err(from_diesel_err)?;
    Ok(ChargingStation {
        id: id.into(),
        kind: load_charger_kind(kind)?,
        location,
        pos,
        price,
        rating,
        charging_rate,
        picture,
        description,
        owner: owner.map(Into::into),
        reactions: load_reactions(reactions),
    })
}

fn load_stations(
    conn: &mut SqliteConnection,
    entities: Vec<models::StationEntity>,
) -> Result<Vec<ChargingStation>> {
    entities
        .into_iter()
        .map(|entity| load_station(conn, entity))
        .collect()
}

fn create_station(conn: &mut SqliteConnection, s: &ChargingStation) -> Result<()> {
    diesel::insert_into(schema::station::table)
        .values(&new_station(s))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let rowid = resolve_station_rowid(conn, &s.id)?;
    replace_station_reactions(conn, rowid, &s.reactions)?;
    Ok(())
}

fn update_station(conn: &mut SqliteConnection, s: &ChargingStation) -> Result<()> {
    use schema::station::dsl;
    let rowid = resolve_station_rowid(conn, &s.id)?;
    diesel::update(dsl::station.filter(dsl::rowid.eq(rowid)))
        .set(&new_station(s))
        .execute(conn)
        .map_err(from_diesel_err)?;
    replace_station_reactions(conn, rowid, &s.reactions)?;
    Ok(())
}

fn delete_station(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::station::dsl;
    let rowid = resolve_station_rowid(conn, id)?;
    // Comments and reactions cascade
    diesel::delete(dsl::station.filter(dsl::rowid.eq(rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_station(conn: &mut SqliteConnection, id: &Id) -> Result<ChargingStation> {
    use schema::station::dsl;
    let entity = dsl::station
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::StationEntity>(conn)
        .map_err(from_diesel_err)?;
    load_station(conn, entity)
}

fn all_stations(conn: &mut SqliteConnection, kind: Option<ChargerKind>) -> Result<Vec<ChargingStation>> {
    use schema::station::dsl;
    let mut query = dsl::station.order_by(dsl::rowid).into_boxed();
    if let Some(kind) = kind {
        query = query.filter(dsl::kind.eq(store_charger_kind(kind)));
    }
    let entities = query
        .load::<models::StationEntity>(conn)
        .map_err(from_diesel_err)?;
    load_stations(conn, entities)
}

fn stations_of_owner(conn: &mut SqliteConnection, owner: &Id) -> Result<Vec<ChargingStation>> {
    use schema::station::dsl;
    let entities = dsl::station
        .filter(dsl::owner.eq(owner.as_str()))
        .order_by(dsl::rowid)
        .load::<models::StationEntity>(conn)
        .map_err(from_diesel_err)?;
    load_stations(conn, entities)
}

fn count_stations(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::station::dsl;
    Ok(dsl::station
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
